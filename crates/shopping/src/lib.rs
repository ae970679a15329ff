mod aggregation;
mod categorization;
mod list;
mod selection;

pub use aggregation::{AggregateEntry, ShoppingAggregator};
pub use categorization::{CategorizationService, Category};
pub use list::{AddShoppingItem, ShoppingItem, ShoppingList, ShoppingListStore};
pub use selection::{Selection, SlotKey};
