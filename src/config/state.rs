// Application state module
// Read-only state shared by every connection

use hyper::body::Bytes;

use super::types::Config;
use crate::handler::docs;
use crate::logger;

/// Application state
pub struct AppState {
    pub config: Config,

    /// Serialized OpenAPI document, built once at startup
    pub openapi_json: Bytes,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let document = docs::openapi_document(&config.docs);
        let openapi_json = match serde_json::to_vec(&document) {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) => {
                logger::log_error(&format!("Failed to serialize OpenAPI document: {e}"));
                Bytes::from_static(b"{}")
            }
        };

        Self {
            config,
            openapi_json,
        }
    }
}
