//! Compatibility engine
//!
//! Scores two natal charts placement by placement (Sun with Sun, Moon with
//! Moon, Rising with Rising). Each pair contributes the name hashes of both
//! signs, minus a fixed penalty when the elements clash. The total is scaled
//! down and capped at [`MAX_SCORE`]; it is not floored at zero.

use crate::domain::value_objects::{Element, NatalChart, UnresolvedPlacement};

/// Subtracted from a placement pair whose elements are incompatible
pub const INCOMPATIBILITY_PENALTY: i64 = 5_000_000;

/// Raw score units per point of the final score
pub const SCORE_DIVISOR: i64 = 500_000;

pub const MAX_SCORE: i64 = 100;

/// Same element, Fire with Air, or Water with Earth.
pub fn element_compatible(a: Element, b: Element) -> bool {
    use Element::*;
    a == b || matches!((a, b), (Fire, Air) | (Air, Fire) | (Water, Earth) | (Earth, Water))
}

/// Sum over characters of the character code written in binary and read
/// back as a decimal number ('A' = 65 = 0b1000001 -> 1_000_001).
///
/// Saturates instead of overflowing for code points wider than 18 bits.
pub fn name_hash(name: &str) -> i64 {
    name.chars()
        .map(|c| {
            format!("{:b}", u32::from(c))
                .parse::<i64>()
                .unwrap_or(i64::MAX)
        })
        .fold(0i64, i64::saturating_add)
}

pub fn pair_score(sign_a: &str, sign_b: &str, compatible: bool) -> i64 {
    let score = name_hash(sign_a).saturating_add(name_hash(sign_b));
    if compatible {
        score
    } else {
        score.saturating_sub(INCOMPATIBILITY_PENALTY)
    }
}

/// Unscaled sum of the three placement pair scores.
pub fn raw_score(a: &NatalChart, b: &NatalChart) -> Result<i64, UnresolvedPlacement> {
    let mut total = 0i64;
    for (pa, pb) in a.placements().iter().zip(b.placements()) {
        let (sa, sb) = (pa.resolved()?, pb.resolved()?);
        let compatible = element_compatible(sa.element, sb.element);
        total = total.saturating_add(pair_score(&sa.name, &sb.name, compatible));
    }
    Ok(total)
}

/// Final score: `floor(raw / 500000)`, capped at 100. Negative totals are kept.
pub fn compatibility_score(a: &NatalChart, b: &NatalChart) -> Result<i64, UnresolvedPlacement> {
    let raw = raw_score(a, b)?;
    Ok(raw.div_euclid(SCORE_DIVISOR).min(MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StarSign;
    use crate::domain::value_objects::{Placement, Planet, ZodiacSign};

    fn chart(signs: [ZodiacSign; 3]) -> NatalChart {
        let place = |planet, sign: ZodiacSign| {
            Placement::new(
                planet,
                sign,
                Some(StarSign::new(
                    sign.index() as u32 + 1,
                    sign.name(),
                    sign.traditional_element(),
                    Vec::new(),
                )),
            )
        };
        NatalChart::new(
            place(Planet::Sun, signs[0]),
            place(Planet::Moon, signs[1]),
            place(Planet::Rising, signs[2]),
        )
    }

    #[test]
    fn element_compatibility_table() {
        use Element::*;
        assert!(element_compatible(Fire, Fire));
        assert!(element_compatible(Fire, Air));
        assert!(element_compatible(Air, Fire));
        assert!(element_compatible(Water, Earth));
        assert!(element_compatible(Earth, Water));
        assert!(!element_compatible(Fire, Water));
        assert!(!element_compatible(Fire, Earth));
        assert!(!element_compatible(Air, Water));
        assert!(!element_compatible(Air, Earth));
    }

    #[test]
    fn name_hash_reads_binary_as_decimal() {
        assert_eq!(name_hash("A"), 1_000_001);
        assert_eq!(name_hash("Leo"), 3_202_312);
        assert_eq!(name_hash("Aries"), 5_421_124);
        assert_eq!(name_hash("Sagittarius"), 12_062_448);
        assert_eq!(name_hash(""), 0);
    }

    #[test]
    fn pair_score_applies_penalty_only_when_incompatible() {
        let both = name_hash("Leo") + name_hash("Aries");
        assert_eq!(pair_score("Leo", "Aries", true), both);
        assert_eq!(pair_score("Leo", "Aries", false), both - INCOMPATIBILITY_PENALTY);
    }

    #[test]
    fn score_for_clashing_charts() {
        // Pisces/Leo, Leo/Taurus, Leo/Scorpio - every pair clashes
        let a = chart([ZodiacSign::Pisces, ZodiacSign::Leo, ZodiacSign::Leo]);
        let b = chart([ZodiacSign::Leo, ZodiacSign::Taurus, ZodiacSign::Scorpio]);
        assert_eq!(raw_score(&a, &b), Ok(15_321_650));
        assert_eq!(compatibility_score(&a, &b), Ok(30));
        assert_eq!(compatibility_score(&b, &a), Ok(30));
    }

    #[test]
    fn identical_charts_never_take_a_penalty() {
        let a = chart([ZodiacSign::Pisces, ZodiacSign::Leo, ZodiacSign::Leo]);
        assert_eq!(raw_score(&a, &a), Ok(25_871_518));
        assert_eq!(compatibility_score(&a, &a), Ok(51));
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        let a = chart([ZodiacSign::Sagittarius; 3]);
        assert!(raw_score(&a, &a).unwrap() / SCORE_DIVISOR > MAX_SCORE);
        assert_eq!(compatibility_score(&a, &a), Ok(MAX_SCORE));
    }

    #[test]
    fn negative_raw_scores_are_not_clamped() {
        // Hypothetical short names with clashing elements
        let place = |planet, element| {
            Placement::new(
                planet,
                ZodiacSign::Aries,
                Some(StarSign::new(1, "A", element, Vec::new())),
            )
        };
        let fire = NatalChart::new(
            place(Planet::Sun, Element::Fire),
            place(Planet::Moon, Element::Fire),
            place(Planet::Rising, Element::Fire),
        );
        let water = NatalChart::new(
            place(Planet::Sun, Element::Water),
            place(Planet::Moon, Element::Water),
            place(Planet::Rising, Element::Water),
        );
        // 3 * (2 * 1_000_001 - 5_000_000) = -8_999_994 -> floor(-17.99) = -18
        assert_eq!(compatibility_score(&fire, &water), Ok(-18));
    }

    #[test]
    fn unresolved_placement_is_an_error() {
        let a = chart([ZodiacSign::Aries; 3]);
        let b = NatalChart::new(
            a.sun().clone(),
            Placement::new(Planet::Moon, ZodiacSign::Virgo, None),
            a.rising().clone(),
        );
        let err = compatibility_score(&a, &b).unwrap_err();
        assert_eq!(err.sign, ZodiacSign::Virgo);
        assert_eq!(err.planet, Planet::Moon);
    }
}
