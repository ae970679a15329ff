use serde_json::Value;

use crate::{ApiClient, ApiError, ApiResult};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision<T> {
    Allow(T),
    Redirect(&'static str),
}

impl<T> GuardDecision<T> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }
}

/// Access checks for authenticated and guest-only screens.
///
/// Every check with a stored token costs one `/auth/me` round-trip.
pub struct Guard<'a> {
    client: &'a ApiClient,
}

impl<'a> Guard<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn require_auth(&self) -> ApiResult<GuardDecision<Value>> {
        match self.validate_token().await? {
            Some(user) => Ok(GuardDecision::Allow(user)),
            None => Ok(GuardDecision::Redirect(LOGIN_PATH)),
        }
    }

    pub async fn guest_only(&self) -> ApiResult<GuardDecision<()>> {
        match self.validate_token().await? {
            Some(_) => Ok(GuardDecision::Redirect(HOME_PATH)),
            None => Ok(GuardDecision::Allow(())),
        }
    }

    async fn validate_token(&self) -> ApiResult<Option<Value>> {
        if !self.client.session().is_logged_in().await? {
            return Ok(None);
        }

        match self.client.me().await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Status { status, message }) => {
                tracing::debug!(status, error = %message, "stored token rejected");
                Ok(None)
            }
            Err(ApiError::Transport(message)) => {
                tracing::warn!(error = %message, "token check failed");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
