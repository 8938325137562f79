//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for route matching,
//! method validation and access logging.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, StatusCode, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{demo, docs};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Every route the service knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    DebugExample,
    TestDebug,
    TestHello,
    OpenApi,
    Docs,
    Redoc,
}

impl Endpoint {
    /// Routes described in the OpenAPI document
    pub const PUBLIC: [Self; 4] = [Self::Root, Self::DebugExample, Self::TestDebug, Self::TestHello];

    /// Resolve a request path; documentation routes only exist when enabled
    pub fn from_path(path: &str, docs_enabled: bool) -> Option<Self> {
        match path {
            "/" => Some(Self::Root),
            "/debug-example" => Some(Self::DebugExample),
            "/test-debug" => Some(Self::TestDebug),
            "/test-hello" => Some(Self::TestHello),
            docs::OPENAPI_PATH if docs_enabled => Some(Self::OpenApi),
            docs::DOCS_PATH if docs_enabled => Some(Self::Docs),
            docs::REDOC_PATH if docs_enabled => Some(Self::Redoc),
            _ => None,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::DebugExample => "/debug-example",
            Self::TestDebug => "/test-debug",
            Self::TestHello => "/test-hello",
            Self::OpenApi => docs::OPENAPI_PATH,
            Self::Docs => docs::DOCS_PATH,
            Self::Redoc => docs::REDOC_PATH,
        }
    }

    pub fn method(self) -> Method {
        match self {
            Self::TestHello => Method::POST,
            _ => Method::GET,
        }
    }

    /// Value of the `Allow` header
    pub const fn allow(self) -> &'static str {
        match self {
            Self::TestHello => "POST",
            _ => "GET, HEAD",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::DebugExample => "Debug Example",
            Self::TestDebug => "Test Debug",
            Self::TestHello => "Test Hello",
            Self::OpenApi => "OpenAPI",
            Self::Docs => "Docs",
            Self::Redoc => "ReDoc",
        }
    }

    pub const fn operation_id(self) -> &'static str {
        match self {
            Self::Root => "root__get",
            Self::DebugExample => "debug_example_debug_example_get",
            Self::TestDebug => "test_debug_test_debug_get",
            Self::TestHello => "test_hello_test_hello_post",
            Self::OpenApi => "openapi_get",
            Self::Docs => "docs_get",
            Self::Redoc => "redoc_get",
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let response = route_request(&req, &state);
    let response = http::with_server_name(response, &state.config.http.server_name);

    if state.config.logging.access_log {
        let entry = access_log_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the route, validate the method, then dispatch.
///
/// Request bodies are never read: every route answers from the path and query alone.
pub fn route_request<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let (method, uri) = (req.method(), req.uri());

    // 1. Route lookup
    let Some(endpoint) = Endpoint::from_path(uri.path(), state.config.docs.enabled) else {
        return http::build_404_response();
    };

    // 2. Method check
    let is_head = *method == Method::HEAD && endpoint.method() == Method::GET;
    if *method != endpoint.method() && !is_head {
        if *method == Method::OPTIONS && state.config.http.enable_cors {
            return http::build_options_response(endpoint.allow());
        }
        logger::log_warning(&format!("Method not allowed: {method} {}", uri.path()));
        return http::build_405_response(endpoint.allow());
    }

    let response = dispatch(endpoint, uri, state);
    if is_head {
        http::strip_body(response)
    } else {
        response
    }
}

/// Run the endpoint handler and serialize its result
fn dispatch(endpoint: Endpoint, uri: &Uri, state: &AppState) -> Response<Full<Bytes>> {
    match endpoint {
        Endpoint::Root => http::json_response(StatusCode::OK, &demo::root()),
        Endpoint::DebugExample => http::json_response(StatusCode::OK, &demo::debug_example()),
        Endpoint::TestDebug => {
            let name = http::query_param(uri.query(), "name");
            http::json_response(StatusCode::OK, &demo::test_debug(name.as_deref()))
        }
        Endpoint::TestHello => http::json_response(StatusCode::OK, &demo::test_hello()),
        Endpoint::OpenApi => http::json_bytes_response(StatusCode::OK, state.openapi_json.clone()),
        Endpoint::Docs => {
            http::response::build_html_response(docs::swagger_ui_html(&state.config.docs.title))
        }
        Endpoint::Redoc => {
            http::response::build_html_response(docs::redoc_html(&state.config.docs.title))
        }
    }
}

fn access_log_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_str(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
