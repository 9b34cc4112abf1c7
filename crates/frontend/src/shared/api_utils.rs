//! API base URL resolution.
//!
//! A single externally supplied value selects the target server: the
//! `DOCSTRING_API_BASE` environment variable, read at build time. Without it
//! the base is derived from the current window location, pointing at the
//! generation service's default port.

/// Get the base URL for API requests
///
/// # Returns
/// - The build-time `DOCSTRING_API_BASE` value (trailing slashes stripped), or
/// - a URL like "http://localhost:8000" derived from the window location, or
/// - an empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("DOCSTRING_API_BASE") {
        return normalize_base(base);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/generate");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://api.local/"), "http://api.local");
        assert_eq!(normalize_base("http://api.local"), "http://api.local");
        assert_eq!(normalize_base("http://api.local//"), "http://api.local");
    }
}
