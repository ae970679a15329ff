use anyhow::Result;
use clap::{Args, Subcommand};
use mealsu_client::{Credentials, Guard, GuardDecision, MeasurementsPatch, ProfileEditor, ProfilePatch};

use super::Context;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Sign in and keep the token locally
    Login {
        /// Falls back to the remembered email
        email: Option<String>,
        #[arg(long)]
        password: String,
        /// Prefill this email next time
        #[arg(long)]
        remember: bool,
    },
    /// Create an account
    Register {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the local session
    Logout,
    /// Check the stored token against the backend
    Whoami,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    Set(ProfileArgs),
}

/// Text fields given as an empty string are cleared.
#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    dietary_preference: Option<String>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long, conflicts_with = "clear_age")]
    age: Option<u32>,
    #[arg(long)]
    clear_age: bool,
    #[arg(long)]
    bio: Option<String>,
}

fn text_edit(value: Option<String>) -> Option<Option<String>> {
    value.map(|value| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    })
}

#[derive(Subcommand)]
pub enum MeasurementsCommand {
    Show,
    Set(MeasurementsArgs),
}

#[derive(Args)]
pub struct MeasurementsArgs {
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    current_weight: Option<f64>,
    #[arg(long)]
    target_weight: Option<f64>,
    #[arg(long)]
    waist: Option<f64>,
    #[arg(long)]
    chest: Option<f64>,
    #[arg(long)]
    thigh: Option<f64>,
    #[arg(long)]
    arm: Option<f64>,
}

fn show_field<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(value) => println!("{label}: {value}"),
        None => println!("{label}: -"),
    }
}

#[tracing::instrument(skip(ctx, command))]
pub async fn auth(ctx: &Context, command: AuthCommand) -> Result<()> {
    let client = ctx.client();

    match command {
        AuthCommand::Login {
            email,
            password,
            remember,
        } => {
            let email = match email {
                Some(email) => email,
                None => ctx
                    .preferences()
                    .remembered_email()
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("no email given and none remembered"))?,
            };
            client
                .login(&Credentials::new(&email, password), remember)
                .await?;
            println!("logged in as {}", email.trim());
        }
        AuthCommand::Register { email, password } => {
            client.register(&Credentials::new(&email, password)).await?;
            println!("registered {}, you can log in now", email.trim());
        }
        AuthCommand::Logout => client.logout().await?,
        AuthCommand::Whoami => match Guard::new(&client).require_auth().await? {
            GuardDecision::Allow(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            GuardDecision::Redirect(path) => {
                anyhow::bail!("not logged in, see `mealsu auth login` ({path})")
            }
        },
    }

    Ok(())
}

async fn require_login(ctx: &Context) -> Result<()> {
    let client = ctx.client();
    if let GuardDecision::Redirect(_) = Guard::new(&client).require_auth().await? {
        anyhow::bail!("not logged in, see `mealsu auth login`");
    }

    Ok(())
}

#[tracing::instrument(skip(ctx, command))]
pub async fn profile(ctx: &Context, command: ProfileCommand) -> Result<()> {
    require_login(ctx).await?;
    let client = ctx.client();
    let mut editor = ProfileEditor::load(&client).await?;

    if let ProfileCommand::Set(args) = command {
        let age = match (args.age, args.clear_age) {
            (_, true) => Some(None),
            (age, false) => age.map(Some),
        };
        editor.edit(ProfilePatch {
            name: text_edit(args.name),
            dietary_preference: text_edit(args.dietary_preference),
            gender: text_edit(args.gender),
            age,
            bio: text_edit(args.bio),
        });
        editor.save(&client).await?;
    }

    let profile = editor.saved();
    println!("email: {}", profile.email);
    show_field("name", &profile.name);
    show_field("dietary preference", &profile.dietary_preference);
    show_field("gender", &profile.gender);
    show_field("age", &profile.age);
    show_field("bio", &profile.bio);

    Ok(())
}

#[tracing::instrument(skip(ctx, command))]
pub async fn measurements(ctx: &Context, command: MeasurementsCommand) -> Result<()> {
    require_login(ctx).await?;
    let client = ctx.client();

    if let MeasurementsCommand::Set(args) = command {
        client
            .update_measurements(MeasurementsPatch {
                height: args.height,
                current_weight: args.current_weight,
                target_weight: args.target_weight,
                waist: args.waist,
                chest: args.chest,
                thigh: args.thigh,
                arm: args.arm,
            })
            .await?;
    }

    let measurements = client.get_measurements().await?;
    show_field("height", &measurements.height);
    show_field("current weight", &measurements.current_weight);
    show_field("target weight", &measurements.target_weight);
    show_field("waist", &measurements.waist);
    show_field("chest", &measurements.chest);
    show_field("thigh", &measurements.thigh);
    show_field("arm", &measurements.arm);

    Ok(())
}
