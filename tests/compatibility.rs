//! End-to-end compatibility scores against the seeded catalog.

mod common;

use common::*;
use starmatch::domain::ports::Repository;
use starmatch::{StarMatchError, ZodiacSign};

#[test]
fn known_pairs_score_as_expected() {
    let service = seeded_memory_service();
    let ann = ann(&service);
    let bob = bob(&service);
    let cy = cy(&service);
    befriend(&service, &ann, &bob);
    befriend(&service, &ann, &cy);

    let profile = service.profile();
    assert_eq!(profile.compatibility(&ann, &bob.email).unwrap().score, 30);
    assert_eq!(profile.compatibility(&ann, &cy.email).unwrap().score, 59);
}

#[test]
fn score_is_symmetric_between_friends() {
    let service = seeded_memory_service();
    let ann = ann(&service);
    let cy = cy(&service);
    befriend(&service, &ann, &cy);

    let forward = service.profile().compatibility(&ann, &cy.email).unwrap();
    let backward = service.profile().compatibility(&cy, &ann.email).unwrap();
    assert_eq!(forward.score, backward.score);
    assert_eq!((forward.user_id, forward.friend_id), (ann.id, cy.id));
    assert_eq!((backward.user_id, backward.friend_id), (cy.id, ann.id));
}

#[test]
fn identical_birth_data_scores_identically() {
    let service = seeded_memory_service();
    let ann = ann(&service);
    let twin = sign_up(&service, "twin@example.com", (2000, 3, 12), (9, 0));
    let bob = bob(&service);
    befriend(&service, &ann, &bob);
    befriend(&service, &twin, &bob);

    let a = service.profile().compatibility(&ann, &bob.email).unwrap();
    let b = service.profile().compatibility(&twin, &bob.email).unwrap();
    assert_eq!(a.score, b.score);

    befriend(&service, &ann, &twin);
    let self_like = service.profile().compatibility(&ann, &twin.email).unwrap();
    assert_eq!(self_like.score, 51);
}

#[test]
fn charts_span_the_moon_boundary_at_new_year() {
    let service = seeded_memory_service();
    let late = sign_up(&service, "late@example.com", (1999, 12, 31), (23, 59));
    let early = sign_up(&service, "early@example.com", (1999, 12, 29), (0, 0));

    let late_chart = service.profile().natal_chart(&late).unwrap();
    let early_chart = service.profile().natal_chart(&early).unwrap();
    assert_eq!(late_chart.moon().sign, ZodiacSign::Pisces);
    assert_eq!(early_chart.moon().sign, ZodiacSign::Aquarius);
    assert_eq!(late_chart.rising().sign, ZodiacSign::Pisces);
    assert_eq!(early_chart.sun().sign, ZodiacSign::Capricorn);
}

#[test]
fn missing_catalog_entry_blocks_scoring() {
    let service = seeded_memory_service();
    let ann = ann(&service);
    let bob = bob(&service);
    befriend(&service, &ann, &bob);

    // Leo is Ann's Moon and Bob's Sun.
    service.repositories().signs.delete(5).unwrap();

    let chart = service.profile().natal_chart(&ann).unwrap();
    assert!(chart.moon().is_unknown());
    assert!(!chart.sun().is_unknown());

    let err = service.profile().compatibility(&ann, &bob.email).unwrap_err();
    assert!(matches!(err, StarMatchError::NotFound { kind: "star sign", .. }));
}
