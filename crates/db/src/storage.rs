use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::table::LocalStorage as Table;

/// String key/value store with the same contract as browser local storage.
///
/// Every write replaces the whole value of one key. Nothing here spans more
/// than one key, so callers that update two related keys can observe a state
/// where only the first write landed.
#[derive(Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn get_item(&self, key: &str) -> mealsu_shared::Result<Option<String>> {
        let statement = Query::select()
            .column(Table::Value)
            .from(Table::Table)
            .and_where(Expr::col(Table::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    pub async fn set_item(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> mealsu_shared::Result<()> {
        let value = value.into();
        let updated_at = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(Table::Table)
            .columns([Table::Key, Table::Value, Table::UpdatedAt])
            .values_panic([key.into(), value.into(), updated_at.into()])
            .on_conflict(
                OnConflict::column(Table::Key)
                    .update_columns([Table::Value, Table::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(key, "storage item written");

        Ok(())
    }

    pub async fn remove_item(&self, key: &str) -> mealsu_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Table::Table)
            .and_where(Expr::col(Table::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(key, "storage item removed");

        Ok(())
    }

    pub async fn keys(&self) -> mealsu_shared::Result<Vec<String>> {
        let statement = Query::select()
            .column(Table::Key)
            .from(Table::Table)
            .order_by(Table::Key, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(key,)| key).collect())
    }

    pub async fn clear(&self) -> mealsu_shared::Result<()> {
        let statement = Query::delete().from_table(Table::Table).to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    /// Reads and decodes a JSON value.
    ///
    /// A missing key and a value that does not decode as `T` both yield
    /// `None`; the decode failure is only logged.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> mealsu_shared::Result<Option<T>> {
        let Some(raw) = self.get_item(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed stored value");
                Ok(None)
            }
        }
    }

    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> mealsu_shared::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, raw).await
    }
}
