use anyhow::{Result, anyhow};
use clap::Subcommand;
use mealsu_mealplan::{AddItemInput, CreatePlanInput, MealPlan, MealType};
use time::Date;

use super::{Context, parse_date_arg};

#[derive(Subcommand)]
pub enum PlanCommand {
    /// List every meal plan
    List,
    /// Create a seven day plan starting on DATE
    Create {
        name: String,
        #[arg(value_parser = parse_date_arg)]
        date: Date,
    },
    /// Print a plan day by day (defaults to the selected plan)
    Show { id: Option<i64> },
    /// Delete a plan
    Remove {
        id: i64,
        /// Also delete the plan's day schedule
        #[arg(long)]
        purge: bool,
    },
    /// Remember a plan as the current one
    Select { id: i64 },
}

#[derive(Subcommand)]
pub enum ItemCommand {
    /// Add a meal to one day of a plan
    Add {
        /// Day index, 0 is the plan's start date
        day: usize,
        title: String,
        #[arg(long)]
        plan: Option<i64>,
        #[arg(long = "type", default_value_t = MealType::Breakfast)]
        meal_type: MealType,
        #[arg(long, default_value = "")]
        notes: String,
        /// Repeat for each ingredient
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Remove a meal from one day of a plan
    Remove {
        day: usize,
        item: i64,
        #[arg(long)]
        plan: Option<i64>,
    },
}

/// Explicit plan id, or the selected plan when none is given.
pub(crate) async fn resolve_plan(ctx: &Context, id: Option<i64>) -> Result<MealPlan> {
    let plans = ctx.plans();
    let plan = match id {
        Some(id) => plans.find(id).await?,
        None => plans.selected().await?,
    };

    plan.ok_or_else(|| match id {
        Some(id) => anyhow!("meal plan {id} not found"),
        None => anyhow!("no meal plans yet, create one with `mealsu plan create`"),
    })
}

#[tracing::instrument(skip(ctx, command))]
pub async fn plan(ctx: &Context, command: PlanCommand) -> Result<()> {
    let plans = ctx.plans();

    match command {
        PlanCommand::List => {
            let selected = plans.selected().await?.map(|plan| plan.id);
            for plan in plans.list().await? {
                let marker = if Some(plan.id) == selected { "*" } else { " " };
                println!(
                    "{marker} {} {} {}",
                    plan.id,
                    mealsu_shared::format_date(plan.date),
                    plan.name
                );
            }
        }
        PlanCommand::Create { name, date } => {
            let plan = plans.create(CreatePlanInput { name, date }).await?;
            println!("{}", plan.id);
        }
        PlanCommand::Show { id } => {
            let plan = resolve_plan(ctx, id).await?;
            println!("{} ({})", plan.name, mealsu_shared::format_date(plan.date));

            for (index, day) in ctx.buckets().load_plan(&plan).await?.iter().enumerate() {
                println!(
                    "{index} {} {}",
                    day.date.weekday(),
                    mealsu_shared::format_date(day.date)
                );
                for item in &day.items {
                    let meal_type = item.meal_type.unwrap_or_default();
                    println!("    {} [{meal_type}] {}", item.id, item.title);
                }
            }
        }
        PlanCommand::Remove { id, purge } => {
            plans.remove(id).await?;
            if purge {
                ctx.buckets().clear(id).await?;
            }
        }
        PlanCommand::Select { id } => {
            let plan = plans.select(id).await?;
            println!("{}", plan.name);
        }
    }

    Ok(())
}

#[tracing::instrument(skip(ctx, command))]
pub async fn item(ctx: &Context, command: ItemCommand) -> Result<()> {
    match command {
        ItemCommand::Add {
            day,
            title,
            plan,
            meal_type,
            notes,
            ingredients,
        } => {
            let plan = resolve_plan(ctx, plan).await?;
            let input = AddItemInput {
                title,
                meal_type,
                notes,
                ingredients,
            };
            let item = ctx.buckets().add_item(&plan, day, input).await?;
            println!("{}", item.id);
        }
        ItemCommand::Remove { day, item, plan } => {
            let plan = resolve_plan(ctx, plan).await?;
            if !ctx.buckets().remove_item(&plan, day, item).await? {
                tracing::warn!(item, day, "no such item on that day");
            }
        }
    }

    Ok(())
}
