//! StarMatch CLI - natal charts and compatibility between friends
//!
//! Usage: starmatch <COMMAND>
//!
//! Commands:
//!   seed     Install the default sign catalog
//!   signup   Register a new user
//!   chart    Show Sun, Moon and Rising placements
//!   compat   Compatibility score with a mutual friend

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use starmatch::{config, StarMatchService};

use cli::{Cli, Commands};
use commands::accounts::SignupArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config, warnings) =
        config::discover(cli.config.as_deref()).context("failed to load configuration")?;
    for warning in &warnings {
        log::warn!("{warning}");
    }
    let service = StarMatchService::from_config(&config);

    match cli.command {
        Commands::Seed => commands::accounts::cmd_seed(&service, cli.json),
        Commands::Signup {
            name,
            email,
            password,
            birth_date,
            birth_time,
            birth_place,
        } => commands::accounts::cmd_signup(
            &service,
            SignupArgs {
                name,
                email,
                password,
                birth_date,
                birth_time,
                birth_place,
            },
            cli.json,
        ),
        Commands::Login { credentials, admin } => {
            commands::accounts::cmd_login(&service, &credentials, admin, cli.json)
        }
        Commands::Chart { credentials } => {
            commands::profile::cmd_chart(&service, &credentials, cli.json)
        }
        Commands::Traits { credentials } => {
            commands::profile::cmd_traits(&service, &credentials, cli.json)
        }
        Commands::Quote { credentials, date } => {
            commands::profile::cmd_quote(&service, &credentials, date, cli.json)
        }
        Commands::Friends { action } => commands::friends::cmd_friends(&service, &action, cli.json),
        Commands::Compat {
            friend,
            credentials,
        } => commands::profile::cmd_compat(&service, &credentials, &friend, cli.json),
        Commands::Users { except } => {
            commands::accounts::cmd_users(&service, except.as_deref(), cli.json)
        }
    }
}

/// `-v` enables info, `-vv` debug, `-vvv` trace. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));
}
