use mealsu_db::{LocalStorage, Preferences, keys};
use time::{Date, OffsetDateTime};
use validator::Validate;

use crate::MealPlan;

#[derive(Debug, Clone, Validate)]
pub struct CreatePlanInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub date: Date,
}

/// CRUD over the `mealPlans` list. Every write re-serializes the whole list.
#[derive(Clone)]
pub struct PlanStore(pub LocalStorage);

impl PlanStore {
    pub async fn list(&self) -> mealsu_shared::Result<Vec<MealPlan>> {
        let plans = self
            .0
            .get_json::<Vec<MealPlan>>(keys::MEAL_PLANS)
            .await?
            .unwrap_or_default();

        Ok(plans)
    }

    pub async fn find(&self, id: i64) -> mealsu_shared::Result<Option<MealPlan>> {
        let plans = self.list().await?;

        Ok(plans.into_iter().find(|plan| plan.id == id))
    }

    pub async fn create(&self, input: CreatePlanInput) -> mealsu_shared::Result<MealPlan> {
        let input = CreatePlanInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let mut plans = self.list().await?;
        let plan = MealPlan {
            id: mealsu_shared::next_id(plans.iter().map(|plan| plan.id)),
            name: input.name,
            date: input.date,
            created_at: OffsetDateTime::now_utc(),
        };

        plans.push(plan.clone());
        self.0.set_json(keys::MEAL_PLANS, &plans).await?;

        tracing::info!(plan.id = plan.id, plan.name = %plan.name, "meal plan created");

        Ok(plan)
    }

    /// Drops the plan from the list. Its `plan:<id>:items` entry is left in
    /// place; use [`crate::DayBucketStore::clear`] to purge it.
    pub async fn remove(&self, id: i64) -> mealsu_shared::Result<()> {
        let plans = self.list().await?;
        let before = plans.len();
        let next = plans
            .into_iter()
            .filter(|plan| plan.id != id)
            .collect::<Vec<_>>();

        self.0.set_json(keys::MEAL_PLANS, &next).await?;

        tracing::info!(plan.id = id, removed = before - next.len(), "meal plan removed");

        Ok(())
    }

    pub async fn select(&self, id: i64) -> mealsu_shared::Result<MealPlan> {
        let Some(plan) = self.find(id).await? else {
            mealsu_shared::not_found!("meal plan {id}");
        };

        Preferences(self.0.clone())
            .set_last_selected_plan_id(plan.id)
            .await?;

        Ok(plan)
    }

    /// The last selected plan when it still exists, otherwise the first plan.
    pub async fn selected(&self) -> mealsu_shared::Result<Option<MealPlan>> {
        let plans = self.list().await?;
        let last = Preferences(self.0.clone()).last_selected_plan_id().await?;

        let selected = last
            .and_then(|id| plans.iter().find(|plan| plan.id == id))
            .or_else(|| plans.first())
            .cloned();

        Ok(selected)
    }
}
