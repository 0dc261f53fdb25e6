//! Astrology engine
//!
//! Maps a birth date and time to Sun, Moon and Rising signs:
//! - Sun: fixed month/day boundary table, the boundary day belongs to the later sign
//! - Moon: `floor(days since 2000-01-01 / 2.5) mod 12`
//! - Rising: `floor(hour / 2) mod 12`

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::domain::entities::StarSign;
use crate::domain::value_objects::{BirthProfile, NatalChart, Placement, Planet, ZodiacSign};

/// `num_days_from_ce()` of 2000-01-01, the Moon cycle epoch.
const MOON_EPOCH_DAYS_FROM_CE: i32 = 730_120;

/// Per month (January first): days before the threshold get the first sign.
const SUN_BOUNDARIES: [(ZodiacSign, u32, ZodiacSign); 12] = [
    (ZodiacSign::Capricorn, 20, ZodiacSign::Aquarius),
    (ZodiacSign::Aquarius, 19, ZodiacSign::Pisces),
    (ZodiacSign::Pisces, 21, ZodiacSign::Aries),
    (ZodiacSign::Aries, 20, ZodiacSign::Taurus),
    (ZodiacSign::Taurus, 21, ZodiacSign::Gemini),
    (ZodiacSign::Gemini, 21, ZodiacSign::Cancer),
    (ZodiacSign::Cancer, 23, ZodiacSign::Leo),
    (ZodiacSign::Leo, 23, ZodiacSign::Virgo),
    (ZodiacSign::Virgo, 23, ZodiacSign::Libra),
    (ZodiacSign::Libra, 23, ZodiacSign::Scorpio),
    (ZodiacSign::Scorpio, 22, ZodiacSign::Sagittarius),
    (ZodiacSign::Sagittarius, 22, ZodiacSign::Capricorn),
];

pub fn sun_sign(birth_date: NaiveDate) -> ZodiacSign {
    let (earlier, threshold, later) = SUN_BOUNDARIES[birth_date.month0() as usize];
    if birth_date.day() < threshold {
        earlier
    } else {
        later
    }
}

/// Position in the Moon cycle; may be any integer, including negative for
/// pre-epoch dates.
pub fn moon_index(birth_date: NaiveDate) -> i64 {
    let days = i64::from(birth_date.num_days_from_ce() - MOON_EPOCH_DAYS_FROM_CE);
    // floor(days / 2.5) == floor(2 * days / 5), kept in integers
    (2 * days).div_euclid(5)
}

pub fn moon_sign(birth_date: NaiveDate) -> ZodiacSign {
    ZodiacSign::from_index(moon_index(birth_date))
}

pub fn rising_sign(birth_time: NaiveTime) -> ZodiacSign {
    ZodiacSign::from_index(i64::from(birth_time.hour() / 2))
}

/// Build the three-placement chart, resolving each sign by name against `catalog`.
pub fn natal_chart(birth: &BirthProfile, catalog: &[StarSign]) -> NatalChart {
    let place = |planet, sign: ZodiacSign| {
        let entry = catalog.iter().find(|s| s.name == sign.name()).cloned();
        if entry.is_none() {
            log::debug!("{planet} sign {sign} has no catalog entry");
        }
        Placement::new(planet, sign, entry)
    };

    NatalChart::new(
        place(Planet::Sun, sun_sign(birth.date)),
        place(Planet::Moon, moon_sign(birth.date)),
        place(Planet::Rising, rising_sign(birth.time)),
    )
}
