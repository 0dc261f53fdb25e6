//! Property tests for the compatibility engine.

use proptest::prelude::*;

use starmatch::domain::services::catalog::default_star_signs;
use starmatch::domain::services::{compatibility_score, element_compatible, natal_chart};
use starmatch::{BirthProfile, Element};

fn any_element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn any_birth() -> impl Strategy<Value = BirthProfile> {
    (-40_000i64..=40_000, 0u32..24, 0u32..60).prop_map(|(offset, h, m)| {
        BirthProfile::new(
            chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset),
            chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            "Anywhere",
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: element compatibility is symmetric and reflexive.
    #[test]
    fn property_element_compatibility_is_symmetric(a in any_element(), b in any_element()) {
        prop_assert_eq!(element_compatible(a, b), element_compatible(b, a));
        prop_assert!(element_compatible(a, a));
    }

    /// PROPERTY: scores never exceed 100, and recomputing gives the same value.
    #[test]
    fn property_score_is_bounded_and_deterministic(a in any_birth(), b in any_birth()) {
        let catalog = default_star_signs();
        let (ca, cb) = (natal_chart(&a, &catalog), natal_chart(&b, &catalog));

        let score = compatibility_score(&ca, &cb).unwrap();
        prop_assert!(score <= 100, "score {score}");
        prop_assert_eq!(score, compatibility_score(&ca, &cb).unwrap());
        prop_assert_eq!(score, compatibility_score(&cb, &ca).unwrap());

        let again = natal_chart(&a, &catalog);
        prop_assert_eq!(score, compatibility_score(&again, &cb).unwrap());
    }
}
