//! Header parsing utilities for API requests.

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the admin token
pub const ADMIN_TOKEN_HEADER: &str = "Admin-Token";

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, or return an error if missing.
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError>;

    /// Check the admin token against the configured one.
    ///
    /// A missing header is a bad request. A wrong token, or any token while
    /// none is configured, is forbidden.
    fn require_admin(&self, configured: Option<&str>) -> Result<(), ApiError>;
}

impl HeaderMapExt for HeaderMap {
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError> {
        self.get(name)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingHeader(name))
    }

    fn require_admin(&self, configured: Option<&str>) -> Result<(), ApiError> {
        let presented = self.require_str(ADMIN_TOKEN_HEADER)?;
        match configured {
            Some(token) if !token.is_empty() && token == presented => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn make_headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            // HTTP header names are case-insensitive
            let header_name = HeaderName::try_from(*name).unwrap();
            headers.insert(header_name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_require_str_present() {
        let headers = make_headers(&[("admin-token", "s3cret")]);
        assert_eq!(headers.require_str("Admin-Token").unwrap(), "s3cret");
    }

    #[test]
    fn test_require_str_missing() {
        let headers = HeaderMap::new();
        let err = headers.require_str("Admin-Token").unwrap_err();
        assert!(matches!(err, ApiError::MissingHeader("Admin-Token")));
    }

    #[test]
    fn test_require_admin_matching_token() {
        let headers = make_headers(&[("Admin-Token", "s3cret")]);
        assert!(headers.require_admin(Some("s3cret")).is_ok());
    }

    #[test]
    fn test_require_admin_missing_header() {
        let err = HeaderMap::new().require_admin(Some("s3cret")).unwrap_err();
        assert!(matches!(err, ApiError::MissingHeader(ADMIN_TOKEN_HEADER)));
    }

    #[test]
    fn test_require_admin_wrong_token() {
        let headers = make_headers(&[("Admin-Token", "guess")]);
        let err = headers.require_admin(Some("s3cret")).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn test_require_admin_not_configured() {
        let headers = make_headers(&[("Admin-Token", "")]);
        assert!(matches!(headers.require_admin(None), Err(ApiError::Forbidden)));
        assert!(matches!(headers.require_admin(Some("")), Err(ApiError::Forbidden)));
    }
}
