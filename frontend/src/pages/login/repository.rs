use crate::api::{ApiClient, ApiError, LoginRequest};

use super::utils::login_error_message;

/// Exchanges credentials for a token. Errors carry the text shown on the form.
pub async fn request_token(api: &ApiClient, request: &LoginRequest) -> Result<String, ApiError> {
    api.login(&request.email, &request.password)
        .await
        .map(|response| response.token)
        .map_err(|err| ApiError {
            error: login_error_message(&err),
            ..err
        })
}
