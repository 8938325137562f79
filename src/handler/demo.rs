//! Debug demo endpoints
//!
//! Each handler is a pure function of its input; the log lines are advisory.

use serde::Serialize;

use crate::logger;

/// Name used by `/test-debug` when the query has none
pub const DEFAULT_NAME: &str = "测试用户";

const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Single-message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Body of `/debug-example`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebugExample {
    pub x: i64,
    pub y: i64,
    pub result: i64,
}

/// Body of `/test-debug`: greeting plus statistics over a fixed sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestDebug {
    pub greeting: String,
    pub numbers: Vec<i64>,
    pub total: i64,
    pub average: f64,
    pub message: &'static str,
}

/// `GET /`
pub fn root() -> Message {
    logger::log_debug("Received request for root path");

    let message = Message {
        message: "Hello World",
    };
    logger::log_info(&format!("Returning message: {message:?}"));
    message
}

/// `GET /debug-example`
pub fn debug_example() -> DebugExample {
    let x = 10;
    let y = 20;
    let result = x + y;

    logger::log_debug(&format!("x = {x}, y = {y}, result = {result}"));

    DebugExample { x, y, result }
}

/// `GET /test-debug`
pub fn test_debug(name: Option<&str>) -> TestDebug {
    let name = name.unwrap_or(DEFAULT_NAME);
    logger::log_info(&format!("Received test request, name = {name}"));

    let greeting = format!("你好, {name}!");

    let numbers = NUMBERS.to_vec();
    let total: i64 = numbers.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let average = total as f64 / numbers.len() as f64;

    logger::log_debug(&format!("Computed: total={total}, average={average:?}"));

    TestDebug {
        greeting,
        numbers,
        total,
        average,
        message: "调试测试成功！",
    }
}

/// `POST /test-hello`
pub const fn test_hello() -> Message {
    Message {
        message: "test hahah",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_body() {
        assert_eq!(
            serde_json::to_string(&root()).unwrap(),
            r#"{"message":"Hello World"}"#
        );
    }

    #[test]
    fn test_debug_example_body() {
        let body = debug_example();
        assert_eq!(body.result, body.x + body.y);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"x":10,"y":20,"result":30}"#
        );
    }

    #[test]
    fn test_greeting_uses_given_name() {
        for name in ["Sam", "", "张三", "a b&c", "   "] {
            assert_eq!(test_debug(Some(name)).greeting, format!("你好, {name}!"));
        }
    }

    #[test]
    fn test_greeting_default_name() {
        assert_eq!(test_debug(None).greeting, "你好, 测试用户!");
    }

    #[test]
    fn test_statistics_are_fixed() {
        let body = test_debug(Some("anyone"));
        assert_eq!(body.numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(body.total, 15);
        assert!((body.average - 3.0).abs() < f64::EPSILON);
        assert_eq!(body.message, "调试测试成功！");
    }

    #[test]
    fn test_debug_serialized_shape() {
        assert_eq!(
            serde_json::to_string(&test_debug(Some("Sam"))).unwrap(),
            r#"{"greeting":"你好, Sam!","numbers":[1,2,3,4,5],"total":15,"average":3.0,"message":"调试测试成功！"}"#
        );
    }

    #[test]
    fn test_hello_body() {
        assert_eq!(
            serde_json::to_string(&test_hello()).unwrap(),
            r#"{"message":"test hahah"}"#
        );
    }

    #[test]
    fn test_repeated_calls_identical() {
        let a = serde_json::to_vec(&test_debug(Some("Sam"))).unwrap();
        let b = serde_json::to_vec(&test_debug(Some("Sam"))).unwrap();
        assert_eq!(a, b);
    }
}
