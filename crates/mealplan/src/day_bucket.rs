use mealsu_db::{LocalStorage, keys};
use time::{Date, Duration};
use validator::Validate;

use crate::{DayBucket, MealPlan, MealType, PlanItem};

pub const DAYS_PER_PLAN: usize = 7;

#[derive(Debug, Clone, Default, Validate)]
pub struct AddItemInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub meal_type: MealType,
    pub notes: String,
    pub ingredients: Vec<String>,
}

/// Seven empty buckets dated from `start`.
pub fn synthesize_buckets(start: Date) -> Vec<DayBucket> {
    (0..DAYS_PER_PLAN)
        .map(|offset| DayBucket {
            date: start.saturating_add(Duration::days(offset as i64)),
            items: vec![],
        })
        .collect()
}

/// Per-plan day schedule stored under `plan:<id>:items`.
///
/// Mutations load the array, change one bucket and write the whole array
/// back. Two writers on the same plan overwrite each other.
#[derive(Clone)]
pub struct DayBucketStore(pub LocalStorage);

impl DayBucketStore {
    pub async fn load(&self, plan_id: i64, start: Date) -> mealsu_shared::Result<Vec<DayBucket>> {
        let key = keys::plan_items(plan_id);
        let days = match self.0.get_json::<Vec<DayBucket>>(&key).await? {
            Some(days) => days,
            None => {
                tracing::debug!(plan.id = plan_id, "no stored buckets, synthesizing a week");
                synthesize_buckets(start)
            }
        };

        Ok(days)
    }

    pub async fn load_plan(&self, plan: &MealPlan) -> mealsu_shared::Result<Vec<DayBucket>> {
        self.load(plan.id, plan.date).await
    }

    pub async fn save(&self, plan_id: i64, days: &[DayBucket]) -> mealsu_shared::Result<()> {
        self.0.set_json(&keys::plan_items(plan_id), days).await
    }

    pub async fn add_item(
        &self,
        plan: &MealPlan,
        day_index: usize,
        input: AddItemInput,
    ) -> mealsu_shared::Result<PlanItem> {
        let input = AddItemInput {
            title: input.title.trim().to_owned(),
            notes: input.notes.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let mut days = self.load_plan(plan).await?;
        let id = mealsu_shared::next_id(
            days.iter()
                .flat_map(|day| day.items.iter().map(|item| item.id)),
        );

        let Some(bucket) = days.get_mut(day_index) else {
            mealsu_shared::user!("day index {day_index} is out of range");
        };

        let ingredients = input
            .ingredients
            .into_iter()
            .map(|ingredient| ingredient.trim().to_owned())
            .filter(|ingredient| !ingredient.is_empty())
            .collect::<Vec<_>>();

        let item = PlanItem {
            id,
            title: input.title,
            meal_type: Some(input.meal_type),
            notes: (!input.notes.is_empty()).then_some(input.notes),
            ingredients: (!ingredients.is_empty()).then_some(ingredients),
        };

        bucket.items.push(item.clone());
        self.save(plan.id, &days).await?;

        tracing::info!(plan.id = plan.id, day_index, item.id = item.id, "plan item added");

        Ok(item)
    }

    /// Returns whether an item was removed. The array is written either way.
    pub async fn remove_item(
        &self,
        plan: &MealPlan,
        day_index: usize,
        item_id: i64,
    ) -> mealsu_shared::Result<bool> {
        let mut days = self.load_plan(plan).await?;

        let Some(bucket) = days.get_mut(day_index) else {
            mealsu_shared::user!("day index {day_index} is out of range");
        };

        let before = bucket.items.len();
        bucket.items.retain(|item| item.id != item_id);
        let removed = bucket.items.len() != before;

        self.save(plan.id, &days).await?;

        tracing::info!(plan.id = plan.id, day_index, item.id = item_id, removed, "plan item removed");

        Ok(removed)
    }

    pub async fn clear(&self, plan_id: i64) -> mealsu_shared::Result<()> {
        self.0.remove_item(&keys::plan_items(plan_id)).await
    }
}
