//! Profile commands: chart, traits, quote, compat

use anyhow::Result;
use chrono::{Local, NaiveDate};

use starmatch::StarMatchService;

use super::{authenticate, emit_json};
use crate::cli::Credentials;

pub fn cmd_chart(service: &StarMatchService, credentials: &Credentials, json: bool) -> Result<()> {
    let user = authenticate(service, credentials)?;
    let chart = service.profile().natal_chart(&user)?;
    if json {
        return emit_json(&chart);
    }
    for placement in chart.placements() {
        let element = placement
            .element()
            .map_or_else(|| "unknown".to_string(), |e| e.to_string());
        println!(
            "{:<7} {} ({})",
            placement.planet.to_string(),
            placement.sign,
            element
        );
    }
    Ok(())
}

pub fn cmd_traits(service: &StarMatchService, credentials: &Credentials, json: bool) -> Result<()> {
    let user = authenticate(service, credentials)?;
    let traits = service.profile().personality_traits(&user)?;
    if json {
        return emit_json(&traits);
    }
    println!("{}", traits.join(", "));
    Ok(())
}

pub fn cmd_quote(
    service: &StarMatchService,
    credentials: &Credentials,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let user = authenticate(service, credentials)?;
    let on = date.unwrap_or_else(|| Local::now().date_naive());
    let quote = service.profile().personalized_quote(&user, on)?;
    if json {
        return emit_json(&quote);
    }
    println!("\"{}\"", quote.text);
    Ok(())
}

pub fn cmd_compat(
    service: &StarMatchService,
    credentials: &Credentials,
    friend: &str,
    json: bool,
) -> Result<()> {
    let user = authenticate(service, credentials)?;
    let result = service.profile().compatibility(&user, friend)?;
    if json {
        return emit_json(&result);
    }
    println!("Compatibility with {friend}: {}", result.score);
    Ok(())
}
