//! Friends command handler

use anyhow::Result;

use starmatch::StarMatchService;

use super::{authenticate, emit_json};
use crate::cli::FriendsAction;

pub fn cmd_friends(service: &StarMatchService, action: &FriendsAction, json: bool) -> Result<()> {
    match action {
        FriendsAction::Add {
            friend,
            credentials,
        } => {
            let user = authenticate(service, credentials)?;
            let user = service.friends().add_friend(&user, friend)?;
            if json {
                return emit_json(user.friend_emails());
            }
            println!("Added {friend}");
        }
        FriendsAction::Remove {
            friend,
            credentials,
        } => {
            let user = authenticate(service, credentials)?;
            let user = service.friends().remove_friend(&user, friend)?;
            if json {
                return emit_json(user.friend_emails());
            }
            println!("Removed {friend}");
        }
        FriendsAction::List { credentials } => {
            let user = authenticate(service, credentials)?;
            let friends = service.friends().friends(&user)?;
            if json {
                return emit_json(&friends);
            }
            if friends.is_empty() {
                println!("No friends yet.");
            }
            for friend in &friends {
                println!("{:<24} {}", friend.name, friend.email);
            }
        }
    }
    Ok(())
}
