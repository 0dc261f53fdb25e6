//! Shared fixtures for StarMatch integration tests.

#![allow(dead_code)]

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use starmatch::application::NewUser;
use starmatch::{Backend, BirthProfile, Config, StarMatchService, StorageConfig, User};

pub fn birth(date: (i32, u32, u32), time: (u32, u32)) -> BirthProfile {
    BirthProfile::new(
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        "Cluj",
    )
}

/// File-backed config rooted at `dir`.
pub fn file_config(dir: &Path) -> Config {
    Config {
        storage: StorageConfig {
            backend: Backend::File,
            data_dir: dir.to_path_buf(),
            ..StorageConfig::default()
        },
    }
}

/// Service over flat files in `dir`, with the default catalog seeded.
pub fn seeded_file_service(dir: &Path) -> StarMatchService {
    let service = StarMatchService::from_config(&file_config(dir));
    service.catalog().seed().unwrap();
    service
}

pub fn seeded_memory_service() -> StarMatchService {
    let service = StarMatchService::in_memory();
    service.catalog().seed().unwrap();
    service
}

pub fn sign_up(
    service: &StarMatchService,
    email: &str,
    date: (i32, u32, u32),
    time: (u32, u32),
) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    service
        .accounts()
        .sign_up_user(NewUser {
            name,
            email: email.to_string(),
            password: "secret".to_string(),
            birth: birth(date, time),
        })
        .unwrap()
}

/// Ann: Pisces Sun, Leo Moon, Leo Rising.
pub fn ann(service: &StarMatchService) -> User {
    sign_up(service, "ann@example.com", (2000, 3, 12), (9, 0))
}

/// Bob: Leo Sun, Taurus Moon, Scorpio Rising.
pub fn bob(service: &StarMatchService) -> User {
    sign_up(service, "bob@example.com", (1995, 7, 30), (14, 0))
}

/// Cy: Capricorn Sun, Cancer Moon, Aries Rising.
pub fn cy(service: &StarMatchService) -> User {
    sign_up(service, "cy@example.com", (1990, 1, 1), (0, 0))
}

pub fn befriend(service: &StarMatchService, a: &User, b: &User) {
    service.friends().add_friend(a, &b.email).unwrap();
    service.friends().add_friend(b, &a.email).unwrap();
}
