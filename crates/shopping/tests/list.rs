use mealsu_db::keys;
use mealsu_shopping::{AddShoppingItem, Category, ShoppingListStore};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_manual_list_persists() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;
    let store = ShoppingListStore(storage.clone());

    assert!(store.load().await?.items.is_empty());

    let milk = store
        .add(AddShoppingItem {
            name: "Milk".to_owned(),
            quantity: "2 l".to_owned(),
            category: None,
        })
        .await?;
    let soap = store
        .add(AddShoppingItem {
            name: "Soap".to_owned(),
            quantity: "1".to_owned(),
            category: None,
        })
        .await?;

    assert_eq!(milk.category, Category::Dairy);
    assert_eq!(soap.category, Category::Other);

    assert!(store.toggle(milk.id).await?);
    assert!(store.remove(soap.id).await?);
    assert!(!store.remove(soap.id).await?);

    let list = store.load().await?;
    assert_eq!(list.items.len(), 1);
    assert!(list.items[0].checked);

    let raw = storage.get_item(keys::SHOPPING_ITEMS).await?.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert!(value.is_array());
    assert_eq!(value[0]["category"], "Dairy");

    Ok(())
}

#[tokio::test]
async fn test_toggle_unknown_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;
    let store = ShoppingListStore(storage);

    let result = store.toggle(1).await;
    assert!(matches!(result, Err(mealsu_shared::Error::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_malformed_list_falls_back_to_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = helpers::setup_test_storage(dir.child("db.sqlite3")).await?;
    storage.set_item(keys::SHOPPING_ITEMS, "{oops").await?;

    let store = ShoppingListStore(storage);
    assert!(store.load().await?.items.is_empty());

    Ok(())
}
