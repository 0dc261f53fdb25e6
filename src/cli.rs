use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

use starmatch::domain::value_objects::parse_birth_time;

/// StarMatch - natal charts and compatibility between friends
#[derive(Parser, Debug)]
#[command(name = "starmatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./starmatch.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Email and password of the acting user
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the default sign catalog, traits and quotes into empty storage
    Seed,

    /// Register a new user
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,

        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time_arg)]
        birth_time: NaiveTime,

        #[arg(long)]
        birth_place: String,
    },

    /// Check a user's (or with --admin, an admin's) credentials
    Login {
        #[command(flatten)]
        credentials: Credentials,

        /// Validate against the admin accounts
        #[arg(long)]
        admin: bool,
    },

    /// Show the Sun, Moon and Rising placements
    Chart {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Show the traits of the Sun sign
    Traits {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Show the quote of the day for the Sun sign's element
    Quote {
        #[command(flatten)]
        credentials: Credentials,

        /// Day to pick the quote for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Manage the friend list
    Friends {
        #[command(subcommand)]
        action: FriendsAction,
    },

    /// Compatibility score with a mutual friend
    Compat {
        /// Friend's email
        friend: String,

        #[command(flatten)]
        credentials: Credentials,
    },

    /// List registered users
    Users {
        /// Leave out the user with this email
        #[arg(long)]
        except: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FriendsAction {
    /// Add a friend by email
    Add {
        friend: String,

        #[command(flatten)]
        credentials: Credentials,
    },

    /// Remove a friend (both directions)
    Remove {
        friend: String,

        #[command(flatten)]
        credentials: Credentials,
    },

    /// List friends
    List {
        #[command(flatten)]
        credentials: Credentials,
    },
}

fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    parse_birth_time(value).ok_or_else(|| format!("invalid time '{value}', expected HH:MM"))
}
