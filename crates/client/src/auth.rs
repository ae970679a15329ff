use mealsu_db::keys;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{ApiClient, ApiResult, Session};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl AsRef<str>, password: impl Into<String>) -> Self {
        Self {
            email: email.as_ref().trim().to_owned(),
            password: password.into(),
        }
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    pub fn session(&self) -> Session {
        Session(self.storage().clone())
    }

    /// Exchanges credentials for a token and stores it for later requests.
    ///
    /// With `remember` the email is kept under `rememberedEmail` to prefill the
    /// next login; without it any previously remembered email is dropped.
    pub async fn login(&self, credentials: &Credentials, remember: bool) -> ApiResult<String> {
        credentials.validate()?;

        let response: LoginResponse = self.post("/auth/login", credentials).await?;
        let token = response.token;
        let storage = self.storage();
        storage.set_item(keys::TOKEN, token.as_str()).await?;
        storage
            .set_item(keys::USER_EMAIL, credentials.email.as_str())
            .await?;

        if remember {
            storage
                .set_item(keys::REMEMBERED_EMAIL, credentials.email.as_str())
                .await?;
        } else {
            storage.remove_item(keys::REMEMBERED_EMAIL).await?;
        }

        tracing::info!(email = %credentials.email, "logged in");

        Ok(token)
    }

    pub async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        credentials.validate()?;

        self.send(Method::POST, "/auth/register", Some(credentials))
            .await?;

        tracing::info!(email = %credentials.email, "account registered");

        Ok(())
    }

    /// Tells the backend about the logout, ignoring its answer, then forgets
    /// the local session.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Err(err) = self.send::<()>(Method::POST, "/auth/logout", None).await {
            tracing::warn!(err = %err, "logout request failed");
        }

        self.session().clear().await?;

        tracing::info!("logged out");

        Ok(())
    }

    /// Validates the stored token and caches the returned user under `auth:user`.
    pub async fn me(&self) -> ApiResult<Value> {
        let user: Value = self.get("/auth/me").await?;
        self.storage().set_json(keys::AUTH_USER, &user).await?;

        Ok(user)
    }
}
