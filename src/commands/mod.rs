//! Command implementations for the FIFA Online 4 statistics CLI

pub mod common;
pub mod dataset;
pub mod image;
pub mod matches;
pub mod meta;
pub mod users;

pub use crate::core::resolve_api_key;
