use sqlx::SqlitePool;
use sqlx_migrator::{
    Info, Migrator,
    migrator::{Migrate, Plan},
};

pub mod keys;
mod m0001;
mod pool;
mod preferences;
mod storage;
pub mod table;

pub use pool::*;
pub use preferences::*;
pub use storage::*;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut conn, &Plan::apply_all()).await?;

    tracing::info!("local storage migrations applied");

    Ok(())
}
