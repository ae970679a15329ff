use std::cmp::Ordering;
use std::collections::HashMap;

use mealsu_mealplan::{DayBucket, PlanItem};
use serde::Serialize;

use crate::{CategorizationService, Category, Selection, SlotKey};

/// One line of the derived shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateEntry {
    pub name: String,
    pub count: usize,
}

impl AggregateEntry {
    pub fn category(&self) -> Category {
        CategorizationService::categorize(&self.name)
    }
}

/// Stateless projection from selected plan items to an ingredient tally.
pub struct ShoppingAggregator;

impl ShoppingAggregator {
    /// Ingredients mentioned by one plan item.
    ///
    /// A non-empty structured list wins. Otherwise `notes` is split on commas
    /// and newlines. A part starting with `-` or `•` loses that bullet before
    /// it is trimmed, so an indented bullet is kept as text. Empty parts are
    /// dropped.
    pub fn extract_ingredients(item: &PlanItem) -> Vec<String> {
        if let Some(ingredients) = item.ingredients.as_ref().filter(|list| !list.is_empty()) {
            return ingredients
                .iter()
                .map(|ingredient| ingredient.trim().to_owned())
                .filter(|ingredient| !ingredient.is_empty())
                .collect();
        }

        let Some(notes) = item.notes.as_deref() else {
            return vec![];
        };

        notes
            .split(['\n', ','])
            .map(|part| {
                part.strip_prefix(['-', '•'])
                    .unwrap_or(part)
                    .trim()
                    .to_owned()
            })
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Tallies ingredients of the selected items.
    ///
    /// Names are compared lower-cased; the casing seen first (day order, then
    /// item order) is kept for display. Output is sorted by display name.
    pub fn aggregate(days: &[DayBucket], selection: &Selection) -> Vec<AggregateEntry> {
        let mut tally: HashMap<String, AggregateEntry> = HashMap::new();

        for (day_index, day) in days.iter().enumerate() {
            for (item_index, item) in day.items.iter().enumerate() {
                if !selection.is_selected(SlotKey::new(day_index, item_index)) {
                    continue;
                }

                for ingredient in Self::extract_ingredients(item) {
                    tally
                        .entry(ingredient.to_lowercase())
                        .or_insert_with(|| AggregateEntry {
                            name: ingredient,
                            count: 0,
                        })
                        .count += 1;
                }
            }
        }

        let mut entries = tally.into_values().collect::<Vec<_>>();
        entries.sort_by(|a, b| compare_names(&a.name, &b.name));

        entries
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
