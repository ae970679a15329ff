use anyhow::Result;
use clap::Subcommand;
use mealsu_shopping::{
    AddShoppingItem, AggregateEntry, Category, Selection, ShoppingAggregator, SlotKey,
};

use super::{Context, resolve_plan};

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Tally ingredients of selected plan items
    Aggregate {
        #[arg(long)]
        plan: Option<i64>,
        /// Item slot as DAY-ITEM, repeatable
        #[arg(long = "select")]
        slots: Vec<SlotKey>,
        /// Select every item of a day, repeatable
        #[arg(long = "day")]
        days: Vec<usize>,
        /// Select every item of the plan
        #[arg(long, conflicts_with_all = ["slots", "days"])]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the manual shopping list
    List,
    /// Add an item to the manual shopping list
    Add {
        name: String,
        quantity: String,
        /// Inferred from the name when omitted
        #[arg(long)]
        category: Option<Category>,
    },
    /// Check or uncheck an item
    Toggle { id: i64 },
    /// Delete an item
    Remove { id: i64 },
}

#[tracing::instrument(skip(ctx, command))]
pub async fn shopping(ctx: &Context, command: ShoppingCommand) -> Result<()> {
    let list = ctx.shopping_list();

    match command {
        ShoppingCommand::Aggregate {
            plan,
            slots,
            days,
            all,
            json,
        } => {
            let plan = resolve_plan(ctx, plan).await?;
            let buckets = ctx.buckets().load_plan(&plan).await?;

            let mut selection = slots.into_iter().collect::<Selection>();
            let days = if all {
                (0..buckets.len()).collect()
            } else {
                days
            };
            for day in days {
                selection.select_day(&buckets, day);
            }

            let entries = ShoppingAggregator::aggregate(&buckets, &selection);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries);
            }
        }
        ShoppingCommand::List => {
            let items = list.load().await?;
            for item in &items.items {
                let mark = if item.checked { "x" } else { " " };
                println!(
                    "[{mark}] {} {} ({}) {}",
                    item.id, item.name, item.quantity, item.category
                );
            }
            println!("{} remaining", items.remaining());
        }
        ShoppingCommand::Add {
            name,
            quantity,
            category,
        } => {
            let item = list
                .add(AddShoppingItem {
                    name,
                    quantity,
                    category,
                })
                .await?;
            println!("{} {}", item.id, item.category);
        }
        ShoppingCommand::Toggle { id } => {
            let checked = list.toggle(id).await?;
            println!("{}", if checked { "checked" } else { "unchecked" });
        }
        ShoppingCommand::Remove { id } => {
            if !list.remove(id).await? {
                tracing::warn!(id, "no such shopping item");
            }
        }
    }

    Ok(())
}

fn print_entries(entries: &[AggregateEntry]) {
    if entries.is_empty() {
        println!("nothing selected");
        return;
    }

    for entry in entries {
        println!("{} x{} [{}]", entry.name, entry.count, entry.category());
    }
}
