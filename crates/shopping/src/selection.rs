use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use mealsu_mealplan::DayBucket;

/// Position of an item inside a plan: `(day index, item index)`.
///
/// The text form is `"<day>-<item>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub day: usize,
    pub item: usize,
}

impl SlotKey {
    pub fn new(day: usize, item: usize) -> Self {
        Self { day, item }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.item)
    }
}

impl FromStr for SlotKey {
    type Err = mealsu_shared::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((day, item)) = value.trim().split_once('-') else {
            mealsu_shared::user!("invalid selection key '{value}', expected <day>-<item>");
        };

        match (day.parse(), item.parse()) {
            (Ok(day), Ok(item)) => Ok(Self { day, item }),
            _ => mealsu_shared::user!("invalid selection key '{value}', expected <day>-<item>"),
        }
    }
}

/// The set of plan items picked for the shopping list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<SlotKey>);

impl Selection {
    /// Builds a selection from a `"<day>-<item>" => bool` map. Only `true`
    /// entries count; keys that do not parse are skipped.
    pub fn from_flags(flags: &HashMap<String, bool>) -> Self {
        let keys = flags
            .iter()
            .filter(|(_, selected)| **selected)
            .filter_map(|(key, _)| key.parse().ok())
            .collect();

        Self(keys)
    }

    pub fn is_selected(&self, key: SlotKey) -> bool {
        self.0.contains(&key)
    }

    pub fn select(&mut self, key: SlotKey) {
        self.0.insert(key);
    }

    /// Flips one slot; returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: SlotKey) -> bool {
        if self.0.remove(&key) {
            return false;
        }

        self.0.insert(key);
        true
    }

    /// Selects every item of one day.
    pub fn select_day(&mut self, days: &[DayBucket], day: usize) {
        let Some(bucket) = days.get(day) else {
            return;
        };

        for item in 0..bucket.items.len() {
            self.0.insert(SlotKey { day, item });
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<SlotKey> for Selection {
    fn from_iter<T: IntoIterator<Item = SlotKey>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
