use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint("https://api.example.com", REGISTER_PATH),
        "https://api.example.com/api/auth/register"
    );
}

#[test]
fn endpoint_with_empty_base_stays_relative() {
    assert_eq!(endpoint("", LOGIN_PATH), "/api/auth/login");
    assert_eq!(endpoint("", CURRENT_USER_PATH), "/api/auth/me");
    assert_eq!(endpoint("", LOGOUT_PATH), "/api/auth/logout");
}

// =============================================================
// Fallback messages
// =============================================================

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "registration failed: 409");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

// =============================================================
// Error body handling
// =============================================================

#[test]
fn api_error_prefers_server_message() {
    let err = api_error(
        409,
        r#"{"message":"Email already registered"}"#,
        "registration failed: 409",
    );
    assert_eq!(
        err,
        AuthError::Api {
            status: 409,
            message: "Email already registered".into(),
        }
    );
}

#[test]
fn api_error_falls_back_on_blank_server_message() {
    let err = api_error(500, r#"{"message":"   "}"#, "registration failed: 500");
    assert_eq!(
        err,
        AuthError::Api {
            status: 500,
            message: "registration failed: 500".into(),
        }
    );
}

#[test]
fn api_error_falls_back_on_unparseable_body() {
    let err = api_error(502, "<html>bad gateway</html>", "registration failed: 502");
    assert_eq!(
        err,
        AuthError::Api {
            status: 502,
            message: "registration failed: 502".into(),
        }
    );
}

#[test]
fn api_error_displays_the_message_alone() {
    let err = api_error(401, r#"{"message":"Invalid credentials"}"#, "login failed: 401");
    assert_eq!(err.to_string(), "Invalid credentials");
}
