use crate::{CreateLinkRequest, CreatedLink, Link, LoginRequest, LoginResponse};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the backend base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the endpoint expects a bearer token.
    const AUTHENTICATED: bool;
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a bearer token
impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

/// List the links owned by the current user
#[derive(Debug, Serialize, Deserialize)]
pub struct ListLinksRequest;

impl ApiRequest for ListLinksRequest {
    type Response = Vec<Link>;
    const PATH: &'static str = "/api/dashboard/links";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;
}

/// Shorten a URL. Success is signalled by `201 Created` only.
impl ApiRequest for CreateLinkRequest {
    type Response = CreatedLink;
    const PATH: &'static str = "/api/shorten";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;
}

/// Resolve a short code to its destination.
///
/// The path is dynamic (`/{short_code}`), so it does not implement `ApiRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveLinkRequest {
    pub short_code: String,
}

impl ResolveLinkRequest {
    pub const METHOD: HttpMethod = HttpMethod::Get;

    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.short_code.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_table_matches_backend_routes() {
        assert_eq!(LoginRequest::PATH, "/api/auth/login");
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert!(!LoginRequest::AUTHENTICATED);

        assert_eq!(ListLinksRequest::PATH, "/api/dashboard/links");
        assert_eq!(ListLinksRequest::METHOD, HttpMethod::Get);
        assert!(ListLinksRequest::AUTHENTICATED);

        assert_eq!(CreateLinkRequest::PATH, "/api/shorten");
        assert!(CreateLinkRequest::AUTHENTICATED);
    }

    #[test]
    fn resolve_path_is_public_short_code() {
        assert_eq!(ResolveLinkRequest::new("abc123").path(), "/abc123");
        assert_eq!(ResolveLinkRequest::new("/abc123").path(), "/abc123");
    }
}
