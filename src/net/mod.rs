//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the wire schema, and
//! `error` is the typed failure surface pages render from.

pub mod api;
pub mod error;
pub mod types;
