//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the article form/list while reading
//! shared state from Leptos context providers; user actions flow back up
//! through callbacks owned by the pages.

pub mod article_form;
pub mod article_list;
pub mod message_banner;
pub mod spinner;
