use anyhow::Result;
use clap::{Parser, Subcommand};
use mealsu::cli::{
    self, AuthCommand, Context, ItemCommand, MeasurementsCommand, PlanCommand, ProfileCommand,
    ShoppingCommand, ThemeCommand,
};

/// mealsu - weekly meal planning from the terminal
#[derive(Parser)]
#[command(name = "mealsu")]
#[command(about = "Plan a week of meals and derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the local database and apply migrations
    Migrate,
    /// Drop the local database and recreate it
    Reset,
    /// Manage meal plans
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Manage the meals of a plan
    #[command(subcommand)]
    Item(ItemCommand),
    /// Ingredient tally and manual shopping list
    #[command(subcommand)]
    Shopping(ShoppingCommand),
    /// Days of a month with planned meals
    Calendar {
        #[arg(long)]
        year: i32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
    },
    /// Sign in, sign up and session checks
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Show or edit the account profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Show or edit body measurements
    #[command(subcommand)]
    Measurements(MeasurementsCommand),
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = mealsu::config::Config::load(args.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealsu::observability::init_observability(
        "mealsu",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match args.command {
        Commands::Migrate => cli::migrate(&config).await,
        Commands::Reset => cli::reset(&config).await,
        command => {
            let ctx = Context::open(config).await?;
            run(&ctx, command).await
        }
    }
}

async fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Plan(command) => cli::plan(ctx, command).await,
        Commands::Item(command) => cli::item(ctx, command).await,
        Commands::Shopping(command) => cli::shopping(ctx, command).await,
        Commands::Calendar { year, month } => cli::calendar(ctx, year, month).await,
        Commands::Auth(command) => cli::auth(ctx, command).await,
        Commands::Profile(command) => cli::profile(ctx, command).await,
        Commands::Measurements(command) => cli::measurements(ctx, command).await,
        Commands::Theme { command } => cli::theme(ctx, command).await,
        Commands::Migrate | Commands::Reset => Ok(()),
    }
}
