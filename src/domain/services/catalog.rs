//! Default sign catalog and quotes
//!
//! Installed by `seed` into empty repositories. Charts always read the
//! catalog from storage, so edited entries take effect immediately.

use crate::domain::entities::{Quote, StarSign};
use crate::domain::value_objects::{Element, ZodiacSign};

fn default_traits(sign: ZodiacSign) -> [&'static str; 3] {
    match sign {
        ZodiacSign::Aries => ["Courageous", "Energetic", "Impulsive"],
        ZodiacSign::Taurus => ["Reliable", "Patient", "Stubborn"],
        ZodiacSign::Gemini => ["Curious", "Adaptable", "Restless"],
        ZodiacSign::Cancer => ["Nurturing", "Loyal", "Moody"],
        ZodiacSign::Leo => ["Generous", "Confident", "Proud"],
        ZodiacSign::Virgo => ["Analytical", "Diligent", "Critical"],
        ZodiacSign::Libra => ["Diplomatic", "Charming", "Indecisive"],
        ZodiacSign::Scorpio => ["Passionate", "Resourceful", "Secretive"],
        ZodiacSign::Sagittarius => ["Optimistic", "Adventurous", "Blunt"],
        ZodiacSign::Capricorn => ["Disciplined", "Ambitious", "Reserved"],
        ZodiacSign::Aquarius => ["Inventive", "Independent", "Aloof"],
        ZodiacSign::Pisces => ["Compassionate", "Intuitive", "Dreamy"],
    }
}

const DEFAULT_QUOTES: [(Element, &str); 8] = [
    (Element::Fire, "Act first and let the spark find its direction"),
    (Element::Fire, "Your warmth is a gift meant to be shared"),
    (Element::Water, "Still waters run deep and so do you"),
    (Element::Water, "Feel everything and let it carry you forward"),
    (Element::Air, "A new idea is only a conversation away"),
    (Element::Air, "Let your curiosity lead the way today"),
    (Element::Earth, "Steady steps build the tallest mountains"),
    (Element::Earth, "Patience turns effort into harvest"),
];

/// The twelve signs with their traditional elements, ids 1..=12.
pub fn default_star_signs() -> Vec<StarSign> {
    ZodiacSign::ALL
        .into_iter()
        .map(|sign| {
            StarSign::new(
                sign.index() as u32 + 1,
                sign.name(),
                sign.traditional_element(),
                default_traits(sign).iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

pub fn default_quotes() -> Vec<Quote> {
    DEFAULT_QUOTES
        .iter()
        .zip(1..)
        .map(|((element, text), id)| Quote::new(id, *element, *text))
        .collect()
}
