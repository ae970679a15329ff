use std::collections::BTreeMap;

use time::Month;

use crate::{DayBucket, DayBucketStore, PlanStore};

/// Day-of-month to planned item count, for days in `year`/`month` that have
/// at least one item.
pub fn highlighted_dates<'a>(
    days: impl IntoIterator<Item = &'a DayBucket>,
    year: i32,
    month: Month,
) -> BTreeMap<u8, usize> {
    let mut highlighted = BTreeMap::new();

    for day in days {
        if day.date.year() != year || day.date.month() != month || day.items.is_empty() {
            continue;
        }

        *highlighted.entry(day.date.day()).or_insert(0) += day.items.len();
    }

    highlighted
}

/// Highlights across every stored plan. Plans without stored buckets
/// contribute nothing.
pub async fn month_overview(
    plans: &PlanStore,
    buckets: &DayBucketStore,
    year: i32,
    month: Month,
) -> mealsu_shared::Result<BTreeMap<u8, usize>> {
    let mut days = vec![];
    for plan in plans.list().await? {
        days.extend(buckets.load_plan(&plan).await?);
    }

    Ok(highlighted_dates(&days, year, month))
}
