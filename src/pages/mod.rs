//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates decision logic
//! to plain modules (`register_flow`) so the contract tests run natively.

pub mod home;
pub mod login;
pub mod register;
pub mod register_flow;
