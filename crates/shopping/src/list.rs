use mealsu_db::{LocalStorage, keys};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{CategorizationService, Category};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct AddShoppingItem {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub quantity: String,
    pub category: Option<Category>,
}

/// Extra items the user adds on top of the aggregated plan ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn add(&mut self, input: AddShoppingItem) -> mealsu_shared::Result<&ShoppingItem> {
        let input = AddShoppingItem {
            name: input.name.trim().to_owned(),
            quantity: input.quantity.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let category = input
            .category
            .unwrap_or_else(|| CategorizationService::categorize(&input.name));

        self.items.push(ShoppingItem {
            id: mealsu_shared::next_id(self.items.iter().map(|item| item.id)),
            name: input.name,
            quantity: input.quantity,
            category,
            checked: false,
        });

        Ok(&self.items[self.items.len() - 1])
    }

    /// Returns the new checked state, or `None` when no item has that id.
    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;

        Some(item.checked)
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        self.items.len() != before
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }
}

/// Persists the manual list under `shoppingItems`.
#[derive(Clone)]
pub struct ShoppingListStore(pub LocalStorage);

impl ShoppingListStore {
    pub async fn load(&self) -> mealsu_shared::Result<ShoppingList> {
        let list = self
            .0
            .get_json::<ShoppingList>(keys::SHOPPING_ITEMS)
            .await?
            .unwrap_or_default();

        Ok(list)
    }

    pub async fn save(&self, list: &ShoppingList) -> mealsu_shared::Result<()> {
        self.0.set_json(keys::SHOPPING_ITEMS, list).await
    }

    pub async fn add(&self, input: AddShoppingItem) -> mealsu_shared::Result<ShoppingItem> {
        let mut list = self.load().await?;
        let item = list.add(input)?.clone();
        self.save(&list).await?;

        tracing::info!(item.id = item.id, item.name = %item.name, "shopping item added");

        Ok(item)
    }

    pub async fn toggle(&self, id: i64) -> mealsu_shared::Result<bool> {
        let mut list = self.load().await?;
        let Some(checked) = list.toggle(id) else {
            mealsu_shared::not_found!("shopping item {id}");
        };
        self.save(&list).await?;

        Ok(checked)
    }

    pub async fn remove(&self, id: i64) -> mealsu_shared::Result<bool> {
        let mut list = self.load().await?;
        let removed = list.remove(id);
        if removed {
            self.save(&list).await?;
        }

        Ok(removed)
    }
}
