//! Property tests for the flat-line record format.
//!
//! Text is generated with leading/trailing blanks and empty values, and
//! every entity must come back from its own line unchanged.

use proptest::prelude::*;

use starmatch::domain::entities::FIELD_SEPARATOR;
use starmatch::{Admin, BirthProfile, Element, Quote, Record, StarSign, Trait, User};

/// Separator-free text, possibly empty or padded with spaces.
fn padded_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ A-Za-z0-9.'!?-]{0,24}").unwrap()
}

fn email() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._+-]{1,12}@[a-z0-9-]{1,10}\\.[a-z]{2,4}").unwrap()
}

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn decode<T: Record>(line: &str) -> T {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    T::from_fields(&fields).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a user line decodes back to the same user, friends included.
    #[test]
    fn property_user_line_round_trips(
        id in 1u32..100_000,
        name in padded_text(),
        own in email(),
        password in "[ A-Za-z0-9!#$%]{0,16}",
        place in padded_text(),
        days in -30_000i64..30_000,
        (h, m) in (0u32..24, 0u32..60),
        friends in proptest::collection::vec(email(), 0..5),
    ) {
        let mut user = User::new(
            id,
            name,
            own,
            password,
            BirthProfile::new(
                chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(days),
                chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap(),
                place,
            ),
        );
        for friend in &friends {
            user.add_friend_email(friend);
        }

        let line = user.to_line();
        let decoded: User = decode(&line);
        prop_assert_eq!(decoded.to_line(), line);
        prop_assert_eq!(decoded, user);
    }

    /// PROPERTY: admin lines round-trip, blanks and all.
    #[test]
    fn property_admin_line_round_trips(
        id in 1u32..100_000,
        name in padded_text(),
        own in padded_text(),
        password in padded_text(),
    ) {
        let admin = Admin::new(id, name, own, password);
        let line = admin.to_line();
        let decoded: Admin = decode(&line);
        prop_assert_eq!(decoded.to_line(), line);
        prop_assert_eq!(decoded, admin);
    }

    /// PROPERTY: a sign keeps its name and every trait, empty ones included.
    #[test]
    fn property_star_sign_line_round_trips(
        id in 1u32..100_000,
        name in padded_text(),
        element in element(),
        traits in proptest::collection::vec(padded_text(), 0..6),
    ) {
        let sign = StarSign::new(id, name, element, traits);
        let line = sign.to_line();
        let decoded: StarSign = decode(&line);
        prop_assert_eq!(decoded.to_line(), line);
        prop_assert_eq!(decoded, sign);
    }

    /// PROPERTY: trait lines round-trip for every element.
    #[test]
    fn property_trait_line_round_trips(
        id in 1u32..100_000,
        element in element(),
        name in padded_text(),
    ) {
        let item = Trait::new(id, element, name);
        let line = item.to_line();
        let decoded: Trait = decode(&line);
        prop_assert_eq!(decoded.to_line(), line);
        prop_assert_eq!(decoded, item);
    }

    /// PROPERTY: quote lines round-trip for every element.
    #[test]
    fn property_quote_line_round_trips(
        id in 1u32..100_000,
        element in element(),
        text in padded_text(),
    ) {
        let quote = Quote::new(id, element, text);
        let line = quote.to_line();
        let decoded: Quote = decode(&line);
        prop_assert_eq!(decoded.to_line(), line);
        prop_assert_eq!(decoded, quote);
    }
}
