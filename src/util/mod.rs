//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and session concerns from page logic
//! to improve reuse and testability.

pub mod return_url;
pub mod session_redirect;
