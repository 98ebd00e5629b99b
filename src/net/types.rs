//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the authentication API's JSON payloads so serde keeps
//! the boundary schema-driven. The confirm-password field is a client-side
//! check only and has no wire representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user identity as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Payload for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Account email address; validated client-side before sending.
    pub email: String,
    /// Plaintext password; the transport is expected to be TLS.
    pub password: String,
    /// Free-form postal address.
    pub address: String,
}

/// Payload for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}
