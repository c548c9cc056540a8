//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and error classification, `types` defines the
//! shared wire schema for login and article endpoints.

pub mod api;
pub mod types;
