//! Post-auth return destination handling.
//!
//! DESIGN
//! ======
//! The auth routes accept a `returnUrl` query parameter so guards can
//! bounce users to sign-in and back to where they were. Only in-app
//! absolute paths are honored; anything else falls back to home so the
//! parameter cannot become an open redirect. Values embedded back into
//! links are percent-encoded so paths containing query delimiters
//! survive the round-trip.

#[cfg(test)]
#[path = "return_url_test.rs"]
mod return_url_test;

/// Query parameter naming the post-auth destination.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// Default destination when no usable `returnUrl` is present.
pub const HOME: &str = "/";

/// Resolve a raw `returnUrl` query value to a safe navigation target.
///
/// Accepts in-app absolute paths (`/...`). Missing or empty values,
/// external URLs, and protocol-relative values (`//...`) resolve to
/// [`HOME`].
#[must_use]
pub fn resolve(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return HOME.to_owned();
    };
    let trimmed = raw.trim();
    if trimmed.starts_with('/') && !trimmed.starts_with("//") {
        trimmed.to_owned()
    } else {
        HOME.to_owned()
    }
}

/// Href for `base` carrying a pending `returnUrl` value forward. The
/// value is percent-encoded so a path containing `&` or other
/// delimiters decodes back intact. Missing or blank values yield the
/// bare route.
#[must_use]
pub fn forward(base: &str, raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            format!("{base}?{RETURN_URL_PARAM}={}", urlencoding::encode(value))
        }
        _ => base.to_owned(),
    }
}
