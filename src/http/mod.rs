//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the endpoint logic.

pub mod query;
pub mod response;

// Re-export commonly used items
pub use query::query_param;
pub use response::{
    build_404_response, build_405_response, build_options_response,
    json_bytes_response, json_response, strip_body, with_server_name,
};
