//! HTTP utilities for Nexon Open API communication

use crate::{Fo4Error, Result, API_KEY_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build the headers for authenticated Open API calls.
///
/// The key is passed through verbatim as the `Authorization` value.
pub fn api_key_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut value = HeaderValue::from_str(api_key.trim())?;
    value.set_sensitive(true);
    h.insert(AUTHORIZATION, value);
    Ok(h)
}

/// Resolve the API key from an explicit value or the `FO4_API_KEY` env var.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => Ok(key),
        None => std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Fo4Error::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_header_map() {
        let headers = api_key_header_map("test_key").unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "test_key");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_api_key_header_map_rejects_control_characters() {
        let result = api_key_header_map("bad\nkey");
        assert!(matches!(result, Err(Fo4Error::InvalidHeader(_))));
    }

    #[test]
    fn test_resolve_api_key_prefers_explicit_value() {
        let key = resolve_api_key(Some("explicit".to_string())).unwrap();
        assert_eq!(key, "explicit");
    }
}
