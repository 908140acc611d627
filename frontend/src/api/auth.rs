use super::{
    client::ApiClient,
    types::{ApiError, CheckTokenResponse, LoginRequest, LoginResponse, User},
};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &request).await
    }

    pub async fn check_token(&self) -> Result<User, ApiError> {
        let response: CheckTokenResponse = self.get_json("/auth/check-token").await?;
        Ok(response.user)
    }
}
