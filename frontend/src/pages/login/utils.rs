use serde_json::{json, Value};

use crate::api::{ApiError, LoginRequest};

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    let mut missing = Vec::new();
    if email.is_empty() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    if !missing.is_empty() {
        let mut error = ApiError::validation("Please enter your email and password");
        error.details = Some(json!({ "fields": missing }));
        return Err(error);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// User-facing text for a failed login.
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        return "Invalid email or password".into();
    }
    let from_server = err
        .details
        .as_ref()
        .and_then(|details| {
            ["message", "error"]
                .iter()
                .find_map(|key| details.get(*key).and_then(Value::as_str))
        })
        .filter(|message| !message.trim().is_empty());
    match from_server {
        Some(message) => message.to_string(),
        None => "Login failed".into(),
    }
}
