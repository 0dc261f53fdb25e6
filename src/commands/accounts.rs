//! Account and catalog commands: seed, signup, login, users

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use starmatch::application::NewUser;
use starmatch::domain::value_objects::format_birth_time;
use starmatch::{BirthProfile, StarMatchService};

use super::emit_json;
use crate::cli::Credentials;

pub fn cmd_seed(service: &StarMatchService, json: bool) -> Result<()> {
    let report = service
        .catalog()
        .seed()
        .context("failed to seed the sign catalog")?;
    if json {
        return emit_json(&report);
    }
    if report.is_empty() {
        println!("Catalog already populated; nothing to seed.");
    } else {
        println!(
            "Seeded {} signs, {} traits and {} quotes.",
            report.signs, report.traits, report.quotes
        );
    }
    Ok(())
}

pub struct SignupArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: NaiveDate,
    pub birth_time: NaiveTime,
    pub birth_place: String,
}

pub fn cmd_signup(service: &StarMatchService, args: SignupArgs, json: bool) -> Result<()> {
    let user = service.accounts().sign_up_user(NewUser {
        name: args.name,
        email: args.email,
        password: args.password,
        birth: BirthProfile::new(args.birth_date, args.birth_time, args.birth_place),
    })?;
    if json {
        return emit_json(&user);
    }
    println!("Welcome, {}! Your account id is {}.", user.name, user.id);
    Ok(())
}

pub fn cmd_login(
    service: &StarMatchService,
    credentials: &Credentials,
    admin: bool,
    json: bool,
) -> Result<()> {
    let accounts = service.accounts();
    let valid = if admin {
        accounts.validate_admin_login(&credentials.email, &credentials.password)?
    } else {
        accounts.validate_user_login(&credentials.email, &credentials.password)?
    };

    if json {
        #[derive(serde::Serialize)]
        struct JsonLogin<'a> {
            email: &'a str,
            admin: bool,
            valid: bool,
        }
        emit_json(&JsonLogin {
            email: &credentials.email,
            admin,
            valid,
        })?;
    } else if valid {
        println!("Login OK for {}", credentials.email);
    } else {
        println!("Invalid email or password");
    }

    if valid {
        Ok(())
    } else {
        anyhow::bail!("login failed for {}", credentials.email)
    }
}

pub fn cmd_users(service: &StarMatchService, except: Option<&str>, json: bool) -> Result<()> {
    let users = match except {
        Some(email) => service.accounts().users_except(email)?,
        None => service.accounts().users()?,
    };
    if json {
        return emit_json(&users);
    }
    for user in &users {
        println!(
            "{:>4}  {:<24} {:<32} {} {} {}",
            user.id,
            user.name,
            user.email,
            user.birth.date,
            format_birth_time(user.birth.time),
            user.birth.place
        );
    }
    Ok(())
}
