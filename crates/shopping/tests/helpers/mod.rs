use std::path::PathBuf;

use mealsu_db::LocalStorage;
use mealsu_mealplan::{DayBucket, MealType, PlanItem};
use time::macros::date;

#[allow(dead_code)]
pub async fn setup_test_storage(path: PathBuf) -> anyhow::Result<LocalStorage> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealsu_db::create_pool(&url, 1).await?;
    mealsu_db::migrate(&pool).await?;

    Ok(LocalStorage::new(pool))
}

#[allow(dead_code)]
pub fn item(id: i64, title: &str, notes: &str) -> PlanItem {
    PlanItem {
        id,
        title: title.to_owned(),
        meal_type: Some(MealType::Lunch),
        notes: Some(notes.to_owned()),
        ingredients: None,
    }
}

/// A week starting 2025-09-22 with the given items per day index.
#[allow(dead_code)]
pub fn week(items: Vec<(usize, PlanItem)>) -> Vec<DayBucket> {
    let mut days = mealsu_mealplan::synthesize_buckets(date!(2025 - 09 - 22));
    for (day, item) in items {
        days[day].items.push(item);
    }
    days
}
