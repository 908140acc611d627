use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::{ApiEnvelope, ApiError},
    config::{self, Backend},
    utils::storage::SessionStorage,
};

/// Characters left untouched when encoding query values and path segments.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

pub fn build_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP client bound to one backend.
///
/// Attaches the stored bearer token to every request. A `401` response is
/// turned into [`ApiError::unauthorized`] and handed back to the caller; the
/// client itself never touches navigation or clears the session.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    backend: Backend,
    base_url: Option<String>,
    storage: SessionStorage,
}

impl ApiClient {
    pub fn new(backend: Backend, storage: SessionStorage) -> Self {
        Self {
            client: Client::new(),
            backend,
            base_url: None,
            storage,
        }
    }

    pub fn new_with_base_url(
        backend: Backend,
        base_url: impl Into<String>,
        storage: SessionStorage,
    ) -> Self {
        Self {
            client: Client::new(),
            backend,
            base_url: Some(base_url.into()),
            storage,
        }
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => config::await_base_url(self.backend).await,
        }
    }

    fn get_auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(token) = self.storage.token() else {
            return headers;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Stored token is not a valid header value; sending without it"),
        }
        headers
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let builder = self
            .http_client()
            .request(method, url)
            .headers(self.get_auth_headers());
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        debug!("{:?} backend responded {}", self.backend, status);
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::unauthorized());
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await;
        let response = self.send(builder).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).await.json(body);
        let response = self.send(builder).await?;
        Self::read_json(response).await
    }

    /// Like [`ApiClient::post_json`], but a non-2xx body shaped like an
    /// envelope is still returned so callers can inspect `success`/`message`.
    pub(crate) async fn post_envelope<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).await.json(body);
        let response = self.send(builder).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to read response: {}", e)))?;
        if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<T>>(&text) {
            return Ok(envelope);
        }
        if status.is_success() {
            Err(ApiError::parse("Failed to parse response"))
        } else {
            Err(Self::error_from_body(status, &text))
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(Self::error_from_body(status, &text))
        }
    }

    fn error_from_body(status: StatusCode, body: &str) -> ApiError {
        let message = serde_json::from_str::<Value>(body).ok().and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
        });
        let mut error = ApiError::http(
            status.as_u16(),
            message.unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        );
        error.details = serde_json::from_str::<Value>(body).ok();
        error
    }
}
