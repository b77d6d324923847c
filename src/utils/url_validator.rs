//! Long URL validation.
//!
//! URLs are checked but never rewritten: the stored value is the submitted
//! string, byte for byte. Inputs that the URL parser would silently alter
//! (surrounding whitespace, embedded tabs or newlines) are rejected instead.

use url::Url;

/// Longest accepted long URL, in bytes.
pub const MAX_LONG_URL_LENGTH: usize = 2048;

/// Errors that can occur during long URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL is {0} bytes long, maximum is {max}", max = MAX_LONG_URL_LENGTH)]
    TooLong(usize),

    #[error("URL must not contain whitespace at either end or control characters")]
    NotVerbatim,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates a long URL before it is persisted.
///
/// # Rules
///
/// 1. **Non-empty**, at most [`MAX_LONG_URL_LENGTH`] bytes
/// 2. **Verbatim**: no leading/trailing whitespace, no ASCII control characters
/// 3. **Absolute**: parses as a URL with a scheme
/// 4. **Protocol**: only HTTP and HTTPS
/// 5. **Host**: non-empty host present
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that fails.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/a").is_ok());
/// assert!(validate_long_url("example.com").is_err());        // No scheme
/// assert!(validate_long_url("javascript:alert(1)").is_err()); // Not HTTP(S)
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_LONG_URL_LENGTH {
        return Err(UrlValidationError::TooLong(input.len()));
    }

    if input.trim() != input || input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::NotVerbatim);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_long_url("https://example.com/a").is_ok());
    }

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_long_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_keeps_everything_parsers_would_normalize() {
        assert!(validate_long_url("HTTPS://EXAMPLE.COM:443/Path?key=VALUE#anchor").is_ok());
    }

    #[test]
    fn test_validate_ip_and_port() {
        assert!(validate_long_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_long_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_unicode_domain() {
        assert!(validate_long_url("https://münchen.de").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert_eq!(validate_long_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_no_protocol() {
        assert!(matches!(
            validate_long_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_not_a_url() {
        assert!(matches!(
            validate_long_url("not-a-valid-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_long_url(" https://example.com"),
            Err(UrlValidationError::NotVerbatim)
        );
        assert_eq!(
            validate_long_url("https://example.com\n"),
            Err(UrlValidationError::NotVerbatim)
        );
    }

    #[test]
    fn test_validate_rejects_embedded_control_characters() {
        assert_eq!(
            validate_long_url("https://exa\tmple.com"),
            Err(UrlValidationError::NotVerbatim)
        );
    }

    #[test]
    fn test_validate_javascript_protocol() {
        assert_eq!(
            validate_long_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_ftp_protocol() {
        assert_eq!(
            validate_long_url("ftp://example.com/file.txt"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_data_protocol() {
        assert_eq!(
            validate_long_url("data:text/plain,Hello"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_LONG_URL_LENGTH));
        assert!(matches!(
            validate_long_url(&url),
            Err(UrlValidationError::TooLong(_))
        ));
    }

    #[test]
    fn test_validate_at_length_limit() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_LONG_URL_LENGTH - prefix.len()));
        assert!(validate_long_url(&url).is_ok());
    }
}
