use anyhow::Result;
use time::Month;

use super::Context;

#[tracing::instrument(skip(ctx))]
pub async fn calendar(ctx: &Context, year: i32, month: u8) -> Result<()> {
    let month = Month::try_from(month)?;
    let highlighted =
        mealsu_mealplan::month_overview(&ctx.plans(), &ctx.buckets(), year, month).await?;

    println!("{month} {year}");
    for (day, count) in highlighted {
        println!("{day:>2} {count} planned");
    }

    Ok(())
}
