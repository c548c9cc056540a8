//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `articles`) so pages and components
//! depend on small focused models. Each struct is a plain value provided to
//! the tree as an `RwSignal` context; mutations go through reducer methods
//! so the update rules stay unit-testable off the browser.

pub mod articles;
pub mod session;
