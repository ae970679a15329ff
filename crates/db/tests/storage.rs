use mealsu_db::{Preferences, Theme, keys};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_set_get_remove() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;

    assert_eq!(storage.get_item("token").await?, None);

    storage.set_item("token", "abc").await?;
    assert_eq!(storage.get_item("token").await?.as_deref(), Some("abc"));

    storage.set_item("token", "def").await?;
    assert_eq!(storage.get_item("token").await?.as_deref(), Some("def"));

    storage.remove_item("token").await?;
    assert_eq!(storage.get_item("token").await?, None);

    Ok(())
}

#[tokio::test]
async fn test_keys_and_clear() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;

    storage.set_item(keys::MEAL_PLANS, "[]").await?;
    storage.set_item(&keys::plan_items(42), "[]").await?;
    storage.set_item(keys::THEME, "dark").await?;

    assert_eq!(
        storage.keys().await?,
        vec!["mealPlans", "plan:42:items", "theme"]
    );

    storage.clear().await?;
    assert!(storage.keys().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_reads_as_none() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;

    storage.set_item(keys::MEAL_PLANS, "{not json").await?;
    let value: Option<Vec<serde_json::Value>> = storage.get_json(keys::MEAL_PLANS).await?;
    assert!(value.is_none());

    storage.set_json(keys::MEAL_PLANS, &vec![1, 2, 3]).await?;
    let value: Option<Vec<i64>> = storage.get_json(keys::MEAL_PLANS).await?;
    assert_eq!(value, Some(vec![1, 2, 3]));

    Ok(())
}

#[tokio::test]
async fn test_preferences() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;
    let preferences = Preferences(storage.clone());

    assert_eq!(preferences.theme().await?, Theme::Light);
    preferences.set_theme(Theme::Dark).await?;
    assert_eq!(preferences.theme().await?, Theme::Dark);
    assert_eq!(storage.get_item(keys::THEME).await?.as_deref(), Some("dark"));

    storage.set_item(keys::THEME, "neon").await?;
    assert_eq!(preferences.theme().await?, Theme::Light);

    assert_eq!(preferences.last_selected_plan_id().await?, None);
    preferences.set_last_selected_plan_id(1700000000000).await?;
    assert_eq!(
        preferences.last_selected_plan_id().await?,
        Some(1700000000000)
    );

    preferences.set_remembered_email("john@mealsu.localhost").await?;
    assert_eq!(
        preferences.remembered_email().await?.as_deref(),
        Some("john@mealsu.localhost")
    );
    preferences.clear_remembered_email().await?;
    assert_eq!(preferences.remembered_email().await?, None);

    Ok(())
}
