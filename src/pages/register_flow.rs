//! Validation and submission flow for the registration form.
//!
//! DESIGN
//! ======
//! The form's decision logic lives in a plain state machine with no
//! framework types, so the whole contract runs under host-side tests.
//! One attempt moves `Idle -> Submitting -> Succeeded -> Navigated`;
//! a failed register call drops back to `Idle` with the failure shown
//! inline, and a rejected validation never leaves `Idle`. The page owns
//! the signal wiring and the actual HTTP call.

#[cfg(test)]
#[path = "register_flow_test.rs"]
mod register_flow_test;

use crate::net::types::RegisterRequest;

/// Inline message for an email that fails the shape check.
pub const EMAIL_INVALID: &str = "Email Is Not Valid";

/// Inline message for a password/confirm mismatch.
pub const PASSWORD_MISMATCH: &str = "Passwords Do No Match";

/// One form interaction's worth of registration fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
}

impl RegistrationInput {
    /// Copy with the email trimmed. Passwords and the other fields keep
    /// their exact text.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            address: self.address.clone(),
        }
    }

    /// Wire payload for the register call. The confirm field never
    /// leaves the client.
    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            address: self.address.clone(),
        }
    }
}

/// Lifecycle of one registration attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterPhase {
    /// Accepting edits and submissions.
    #[default]
    Idle,
    /// A register call is in flight; further submissions are ignored.
    Submitting,
    /// The register call succeeded; navigation has not fired yet.
    Succeeded,
    /// The post-success navigation fired. Terminal.
    Navigated,
}

/// State machine for the registration form's submit flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFlow {
    phase: RegisterPhase,
    message: Option<String>,
}

impl RegisterFlow {
    /// Current attempt phase.
    #[must_use]
    pub const fn phase(&self) -> RegisterPhase {
        self.phase
    }

    /// Message to show inline, from validation or a failed register call.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while a register call is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, RegisterPhase::Submitting)
    }

    /// Validate and accept one submission.
    ///
    /// The email is trimmed before validation and the returned input
    /// carries the trimmed value, so the register call sends exactly
    /// what was validated. A rejected validation sets the inline
    /// message and stays idle. Submissions while a call is in flight,
    /// or after success, return `None` without touching state.
    pub fn submit(&mut self, input: &RegistrationInput) -> Option<RegistrationInput> {
        if self.phase != RegisterPhase::Idle {
            return None;
        }
        let input = input.normalized();
        if let Err(message) = validate(&input) {
            self.message = Some(message.to_owned());
            return None;
        }
        self.message = None;
        self.phase = RegisterPhase::Submitting;
        Some(input)
    }

    /// Settle the in-flight register call as succeeded.
    pub fn resolve_success(&mut self) {
        if self.phase == RegisterPhase::Submitting {
            self.phase = RegisterPhase::Succeeded;
        }
    }

    /// Settle the in-flight register call as failed. The flow returns to
    /// idle so the user can retry, with the failure shown inline.
    pub fn resolve_failure(&mut self, message: String) {
        if self.phase == RegisterPhase::Submitting {
            self.phase = RegisterPhase::Idle;
            self.message = Some(message);
        }
    }

    /// Record the one-time post-success navigation.
    pub fn mark_navigated(&mut self) {
        if self.phase == RegisterPhase::Succeeded {
            self.phase = RegisterPhase::Navigated;
        }
    }
}

/// Check one normalized submission: email shape first, then password
/// match.
fn validate(input: &RegistrationInput) -> Result<(), &'static str> {
    if !is_valid_email(&input.email) {
        return Err(EMAIL_INVALID);
    }
    if input.password != input.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Standard email shape check: `local@domain.tld` with no whitespace,
/// exactly one `@`, and a dot splitting a non-empty host and suffix.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !suffix.is_empty()
}
