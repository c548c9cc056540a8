//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into exactly two kinds: `Unauthorized` (the
//! stored token is invalid or expired, callers must clear it and return to
//! the login screen) and `Other` (terminal for that user action, shown in
//! the message banner). No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ArticleDraft, ArticleResponse, ArticlesResponse, Credentials, LoginResponse};
#[cfg(feature = "hydrate")]
use super::types::MessageResponse;

#[cfg(any(test, feature = "hydrate"))]
const UNAUTHORIZED_STATUS: u16 = 401;

/// Classified failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    Unauthorized(String),
    /// Network, validation, or server failure; the caller stays put.
    Other(String),
}

impl ApiError {
    /// Human-readable description, shown in the message banner.
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized(m) | Self::Other(m) => m,
        }
    }

    /// Whether the caller must clear the token and return to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn article_endpoint(article_id: i64) -> String {
    format!("/api/articles/{article_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Sort a failed response's status + message into the two error kinds.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, message: String) -> ApiError {
    if status == UNAUTHORIZED_STATUS {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Other(message)
    }
}

/// Extract the error from a non-2xx response, preferring the server's
/// `message` body over a generic status line.
#[cfg(feature = "hydrate")]
async fn failure_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<MessageResponse>()
        .await
        .map_or_else(|_| request_failed_message(status), |body| body.message);
    classify_failure(status, message)
}

/// Log in via `POST /api/login`.
///
/// # Errors
///
/// `Other` for network or server failures. Bad credentials come back as a
/// 401 and classify as `Unauthorized` like any other call; there is no
/// stored token for the caller to clear, so the login page just shows the
/// message.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/login")
            .json(credentials)
            .map_err(|e| ApiError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        if !resp.ok() {
            return Err(failure_from_response(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Other("not available on server".to_owned()))
    }
}

/// Fetch all articles via `GET /api/articles`.
///
/// # Errors
///
/// `Unauthorized` when the token has gone bad, `Other` for anything else.
pub async fn fetch_articles(token: &str) -> Result<ArticlesResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/articles")
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        if !resp.ok() {
            return Err(failure_from_response(resp).await);
        }
        resp.json::<ArticlesResponse>()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Other("not available on server".to_owned()))
    }
}

/// Create an article via `POST /api/articles`. The response carries the
/// stored article with its server-assigned identifier.
///
/// # Errors
///
/// `Unauthorized` when the token has gone bad, `Other` for anything else.
pub async fn create_article(
    token: &str,
    draft: &ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/articles")
            .header("Authorization", &bearer_header_value(token))
            .json(draft)
            .map_err(|e| ApiError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        if !resp.ok() {
            return Err(failure_from_response(resp).await);
        }
        resp.json::<ArticleResponse>()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Other("not available on server".to_owned()))
    }
}

/// Update an article via `PUT /api/articles/{id}`.
///
/// # Errors
///
/// `Unauthorized` when the token has gone bad, `Other` for anything else.
pub async fn update_article(
    token: &str,
    article_id: i64,
    draft: &ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&article_endpoint(article_id))
            .header("Authorization", &bearer_header_value(token))
            .json(draft)
            .map_err(|e| ApiError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        if !resp.ok() {
            return Err(failure_from_response(resp).await);
        }
        resp.json::<ArticleResponse>()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, article_id, draft);
        Err(ApiError::Other("not available on server".to_owned()))
    }
}

/// Delete an article via `DELETE /api/articles/{id}`. Returns the server's
/// confirmation message.
///
/// # Errors
///
/// `Unauthorized` when the token has gone bad, `Other` for anything else.
pub async fn delete_article(token: &str, article_id: i64) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&article_endpoint(article_id))
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        if !resp.ok() {
            return Err(failure_from_response(resp).await);
        }
        let body: MessageResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, article_id);
        Err(ApiError::Other("not available on server".to_owned()))
    }
}
