//! Type-safe wrappers and enums for FIFA Online 4 data.

pub mod ids;
pub mod meta;
