//! Request handler module
//!
//! Responsible for request routing dispatch and the endpoint logic.

pub mod demo;
pub mod docs;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
