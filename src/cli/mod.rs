mod account;
mod calendar;
mod database;
mod plan;
mod shopping;
mod theme;

pub use account::*;
pub use calendar::*;
pub use database::*;
pub use plan::*;
pub use shopping::*;
pub use theme::*;

use anyhow::Result;
use mealsu_client::ApiClient;
use mealsu_db::{LocalStorage, Preferences};
use mealsu_mealplan::{DayBucketStore, PlanStore};
use mealsu_shopping::ShoppingListStore;
use time::Date;

use crate::config::Config;

/// Opened local storage plus the handles every command works through.
pub struct Context {
    pub config: Config,
    pub storage: LocalStorage,
}

impl Context {
    /// Connects to the local database, creating and migrating it as needed.
    pub async fn open(config: Config) -> Result<Self> {
        let pool =
            mealsu_db::create_pool(&config.database.url, config.database.max_connections).await?;
        mealsu_db::migrate(&pool).await?;

        Ok(Self {
            config,
            storage: LocalStorage::new(pool),
        })
    }

    pub fn plans(&self) -> PlanStore {
        PlanStore(self.storage.clone())
    }

    pub fn buckets(&self) -> DayBucketStore {
        DayBucketStore(self.storage.clone())
    }

    pub fn shopping_list(&self) -> ShoppingListStore {
        ShoppingListStore(self.storage.clone())
    }

    pub fn preferences(&self) -> Preferences {
        Preferences(self.storage.clone())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config.api.base_url, self.storage.clone())
    }
}

pub(crate) fn parse_date_arg(value: &str) -> Result<Date, String> {
    mealsu_shared::parse_date(value).map_err(|_| format!("'{value}' is not a YYYY-MM-DD date"))
}
