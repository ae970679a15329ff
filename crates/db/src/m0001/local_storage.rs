use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::LocalStorage;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(LocalStorage::Table)
        .col(
            ColumnDef::new(LocalStorage::Key)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(LocalStorage::Value).text().not_null())
        .col(
            ColumnDef::new(LocalStorage::UpdatedAt)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(LocalStorage::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
