//! Adapters for converting session state to outbound API payloads

mod restore_request;

pub use restore_request::*;
