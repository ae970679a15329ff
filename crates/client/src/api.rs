use mealsu_db::{LocalStorage, keys};
use reqwest::{Method, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{ApiError, ApiResult, Body, failure_message};

/// JSON client for the mealsu backend.
///
/// The bearer token is read from storage on every request so a login or
/// logout performed through another handle is picked up immediately.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: LocalStorage,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, storage: LocalStorage) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            http: reqwest::Client::new(),
            base_url,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send::<()>(Method::GET, path, None).await?;
        decode(body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, path, Some(body)).await?;
        decode(body)
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::PUT, path, Some(body)).await?;
        decode(body)
    }

    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Body> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.storage.get_item(keys::TOKEN).await? {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            request = request.body(payload);
        }

        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let text = response.text().await.map_err(ApiError::transport)?;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) if is_json => Body::Json(value),
            _ => Body::Text(text),
        };

        if !status.is_success() {
            let message = failure_message(&body, status.canonical_reason());
            tracing::debug!(status = status.as_u16(), error = %message, "api request failed");

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: Body) -> ApiResult<T> {
    let value = match body {
        Body::Json(value) => value,
        Body::Text(text) if text.trim().is_empty() => Value::Null,
        Body::Text(text) => {
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?
        }
    };

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
