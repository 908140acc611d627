use crate::api::{ApiClient, ApiError, User};

pub async fn fetch_current_user(api: &ApiClient) -> Result<User, ApiError> {
    api.check_token().await
}
