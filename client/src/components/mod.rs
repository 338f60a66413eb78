//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and gate access while reading shared
//! state from Leptos context providers.

pub mod require_auth;
pub mod stats_panel;
pub mod toolbar;
