//! Nexon FIFA Online 4 endpoints: static metadata, Open API, ranking page and CDN.

pub mod http;
pub mod meta;
pub mod rank;
pub mod types;

pub use http::{Endpoints, Fo4Client};
pub use meta::Lookup;
