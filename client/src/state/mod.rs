//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the durable owner of the operator session, `auth` and
//! `theme` are the page-lifetime contexts built on top of storage, and
//! `remote` models per-region fetch state for pages.

pub mod auth;
pub mod remote;
pub mod session;
pub mod theme;
