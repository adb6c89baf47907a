//! Core utilities for the FIFA Online 4 statistics client
//!
//! - `http`: API key resolution and request headers

pub mod http;

pub use http::{api_key_header_map, resolve_api_key};
