use mealsu_db::{LocalStorage, keys};
use serde_json::Value;

/// Read side of the locally stored login state.
#[derive(Clone)]
pub struct Session(pub LocalStorage);

impl Session {
    pub async fn token(&self) -> mealsu_shared::Result<Option<String>> {
        self.0.get_item(keys::TOKEN).await
    }

    pub async fn is_logged_in(&self) -> mealsu_shared::Result<bool> {
        Ok(self.token().await?.is_some())
    }

    pub async fn email(&self) -> mealsu_shared::Result<Option<String>> {
        self.0.get_item(keys::USER_EMAIL).await
    }

    /// User payload cached by the last successful `/auth/me` call.
    pub async fn cached_user(&self) -> mealsu_shared::Result<Option<Value>> {
        self.0.get_json(keys::AUTH_USER).await
    }

    pub async fn clear(&self) -> mealsu_shared::Result<()> {
        for key in [keys::TOKEN, keys::USER_EMAIL, keys::AUTH_USER] {
            self.0.remove_item(key).await?;
        }

        Ok(())
    }
}
