//! Typed failure surface for the authentication API.
//!
//! ERROR HANDLING
//! ==============
//! Pages render these through `Display`, so the variants carry the exact
//! text a user should see. `Api` prefers the server's own message when the
//! response body had one.

use thiserror::Error;

/// Failure modes for calls against the authentication API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response: {0}")]
    Malformed(String),
    /// A browser-only call was reached from a non-browser build.
    #[error("not available outside the browser")]
    Unavailable,
}
