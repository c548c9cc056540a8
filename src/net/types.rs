//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! handles the whole boundary and handler code stays schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An article as represented in the wire protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier.
    pub article_id: i64,
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// Request body for `POST /api/articles` and `PUT /api/articles/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response from `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Response from `GET /api/articles`.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticlesResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

/// Response from `POST /api/articles` and `PUT /api/articles/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Response carrying only a confirmation or error message.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
