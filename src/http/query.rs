//! Query string decoding
//!
//! Query strings are `application/x-www-form-urlencoded`: percent-escapes are
//! decoded and `+` is a space. When a key repeats, the last value wins.

use url::form_urlencoded;

/// Get a decoded query parameter by key
pub fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| k == key)
        .last()
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(query_param(Some("name=Sam"), "name"), Some("Sam".to_string()));
    }

    #[test]
    fn test_missing() {
        assert_eq!(query_param(None, "name"), None);
        assert_eq!(query_param(Some(""), "name"), None);
        assert_eq!(query_param(Some("other=1"), "name"), None);
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        assert_eq!(
            query_param(Some("name=%E5%BC%A0%E4%B8%89"), "name"),
            Some("张三".to_string())
        );
        assert_eq!(
            query_param(Some("name=Ada+Lovelace"), "name"),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_last_value_wins() {
        assert_eq!(
            query_param(Some("name=first&x=1&name=second"), "name"),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_empty_value_is_present() {
        assert_eq!(query_param(Some("name="), "name"), Some(String::new()));
        assert_eq!(query_param(Some("name"), "name"), Some(String::new()));
    }
}
