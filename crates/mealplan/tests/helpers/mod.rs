use std::path::PathBuf;

use mealsu_db::LocalStorage;
use mealsu_mealplan::{CreatePlanInput, MealPlan, PlanStore};
use time::Date;

pub struct TestState {
    pub storage: LocalStorage,
    pub plans: PlanStore,
    pub buckets: mealsu_mealplan::DayBucketStore,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealsu_db::create_pool(&url, 1).await?;
    mealsu_db::migrate(&pool).await?;
    let storage = LocalStorage::new(pool);

    Ok(TestState {
        plans: PlanStore(storage.clone()),
        buckets: mealsu_mealplan::DayBucketStore(storage.clone()),
        storage,
    })
}

#[allow(dead_code)]
pub async fn create_plan(
    state: &TestState,
    name: impl Into<String>,
    date: Date,
) -> anyhow::Result<MealPlan> {
    let plan = state
        .plans
        .create(CreatePlanInput {
            name: name.into(),
            date,
        })
        .await?;

    Ok(plan)
}
