use anyhow::Result;
use clap::Subcommand;
use mealsu_db::Theme;

use super::Context;

#[derive(Subcommand)]
pub enum ThemeCommand {
    Get,
    Set { theme: Theme },
}

#[tracing::instrument(skip(ctx, command))]
pub async fn theme(ctx: &Context, command: Option<ThemeCommand>) -> Result<()> {
    let preferences = ctx.preferences();

    match command.unwrap_or(ThemeCommand::Get) {
        ThemeCommand::Get => println!("{}", preferences.theme().await?),
        ThemeCommand::Set { theme } => preferences.set_theme(theme).await?,
    }

    Ok(())
}
