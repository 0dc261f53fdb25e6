//! Property tests for chart computation.

use chrono::{Datelike, NaiveDate, NaiveTime};
use proptest::prelude::*;

use starmatch::domain::services::astrology::moon_index;
use starmatch::domain::services::{moon_sign, rising_sign, sun_sign};
use starmatch::ZodiacSign;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1800-01-01 ..= 2200-12-31
    (-73_000i64..=73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn any_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the Sun sign only depends on month and day.
    #[test]
    fn property_sun_sign_ignores_year(date in any_date(), year in 1900i32..2100) {
        if let Some(moved) = date.with_year(year) {
            prop_assert_eq!(sun_sign(date), sun_sign(moved));
        }
    }

    /// PROPERTY: a Sun sign never jumps more than one sign between consecutive days.
    #[test]
    fn property_sun_sign_moves_at_most_one_step(date in any_date()) {
        let next = date.succ_opt().unwrap();
        let step = (sun_sign(next).index() + 12 - sun_sign(date).index()) % 12;
        prop_assert!(step <= 1, "{date}: {:?} -> {:?}", sun_sign(date), sun_sign(next));
    }

    /// PROPERTY: the Moon index is floor(2 * days / 5) and its sign is that index mod 12.
    #[test]
    fn property_moon_sign_follows_the_index(date in any_date()) {
        let index = moon_index(date);
        let days = date.num_days_from_ce() as i64 - 730_120;
        prop_assert!(index * 5 <= 2 * days && 2 * days < (index + 1) * 5);
        prop_assert_eq!(moon_sign(date), ZodiacSign::from_index(index));
        prop_assert_eq!(moon_sign(date).index() as i64, index.rem_euclid(12));
    }

    /// PROPERTY: the Rising sign is the two-hour slot of the birth time.
    #[test]
    fn property_rising_sign_is_two_hour_slot(time in any_time()) {
        use chrono::Timelike;
        let sign = rising_sign(time);
        prop_assert_eq!(sign.index() as u32, time.hour() / 2);
    }
}
