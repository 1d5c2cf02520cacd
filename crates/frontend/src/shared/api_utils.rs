//! API utilities for talking to the extraction service
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Injected at build time via the `EXTRACTOR_API_URL` environment variable;
/// falls back to the local development server when unset.
pub fn api_base() -> &'static str {
    option_env!("EXTRACTOR_API_URL").unwrap_or("http://127.0.0.1:8000")
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/extract/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_base_and_path() {
        assert_eq!(
            api_url("/api/extract/"),
            format!("{}/api/extract/", api_base())
        );
        assert!(api_url("/api/extract/").starts_with("http"));
    }
}
