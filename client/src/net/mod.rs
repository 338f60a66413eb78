//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the client every page calls, `transport` is the seam to the
//! browser `fetch`, `endpoints` names the backend routes, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod endpoints;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
