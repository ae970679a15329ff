use strum::{AsRefStr, Display, EnumString};

use crate::{LocalStorage, keys};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Typed access to the UI preference keys.
#[derive(Clone)]
pub struct Preferences(pub LocalStorage);

impl Preferences {
    pub async fn theme(&self) -> mealsu_shared::Result<Theme> {
        let theme = self
            .0
            .get_item(keys::THEME)
            .await?
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Ok(theme)
    }

    pub async fn set_theme(&self, theme: Theme) -> mealsu_shared::Result<()> {
        self.0.set_item(keys::THEME, theme.as_ref()).await
    }

    pub async fn last_selected_plan_id(&self) -> mealsu_shared::Result<Option<i64>> {
        let id = self
            .0
            .get_item(keys::LAST_SELECTED_PLAN_ID)
            .await?
            .and_then(|value| value.trim().parse().ok());

        Ok(id)
    }

    pub async fn set_last_selected_plan_id(&self, id: i64) -> mealsu_shared::Result<()> {
        self.0
            .set_item(keys::LAST_SELECTED_PLAN_ID, id.to_string())
            .await
    }

    pub async fn remembered_email(&self) -> mealsu_shared::Result<Option<String>> {
        self.0.get_item(keys::REMEMBERED_EMAIL).await
    }

    pub async fn set_remembered_email(&self, email: &str) -> mealsu_shared::Result<()> {
        self.0.set_item(keys::REMEMBERED_EMAIL, email).await
    }

    pub async fn clear_remembered_email(&self) -> mealsu_shared::Result<()> {
        self.0.remove_item(keys::REMEMBERED_EMAIL).await
    }
}
