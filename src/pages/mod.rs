//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (request flows, navigation)
//! and delegates rendering details to `components`.

pub mod articles;
pub mod login;
