use std::path::PathBuf;

use mealsu_db::LocalStorage;

pub async fn setup_test_storage(path: PathBuf) -> anyhow::Result<LocalStorage> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealsu_db::create_pool(&url, 1).await?;
    mealsu_db::migrate(&pool).await?;

    Ok(LocalStorage::new(pool))
}
