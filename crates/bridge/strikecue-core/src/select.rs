//! Animation-name selection.
//!
//! Pure mapping from a request's classification tags to one animation-name
//! string following the fixed grammar `"[DS] " + <Bucket> + " + " + <Qualifier>`.
//! The grammar is a contract with the external animation database and is
//! reproduced exactly (capitalization, spacing, bracket literal). Total
//! function: every input yields a valid name.

use serde::{Deserialize, Serialize};

use crate::catalog::NAME_PREFIX;
use crate::keywords::KeywordSet;

/// Delivery-context category of an animation name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    OnToken,
    Range,
    Melee,
}

impl Bucket {
    /// Label as it appears inside animation names.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::OnToken => "On Token",
            Bucket::Range => "Range",
            Bucket::Melee => "Melee",
        }
    }
}

/// Element qualifiers in fixed priority order. The qualifier scan walks this
/// list, not the input keyword order.
pub const ELEMENTS: [&str; 11] = [
    "fire",
    "cold",
    "lightning",
    "acid",
    "poison",
    "thunder",
    "psychic",
    "radiant",
    "necrotic",
    "force",
    "holy",
];

/// Classify a keyword set into a delivery bucket.
///
/// No `strike` keyword means the ability is a buff/debuff and lands on the
/// token. With `strike`, `ranged` wins over `melee` when both are present,
/// and a bare strike defaults to melee.
pub fn bucket_for(keywords: &KeywordSet) -> Bucket {
    if !keywords.contains("strike") {
        return Bucket::OnToken;
    }
    if keywords.contains("ranged") {
        Bucket::Range
    } else {
        Bucket::Melee
    }
}

/// First letter uppercased, remainder unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Pick the qualifier: first element (in `ELEMENTS` order) present in the
/// keyword set, else the damage type when it names an element or "none",
/// else the literal `None`.
fn qualifier(keywords: &KeywordSet, damage_type: Option<&str>) -> String {
    if let Some(element) = ELEMENTS.iter().find(|e| keywords.contains(e)) {
        return capitalize(element);
    }
    if let Some(dt) = damage_type {
        let lower = dt.to_lowercase();
        if lower == "none" || ELEMENTS.contains(&lower.as_str()) {
            return capitalize(&lower);
        }
    }
    "None".to_string()
}

/// Map classification tags to one animation name. Never fails.
pub fn select_animation(keywords: &KeywordSet, damage_type: Option<&str>) -> String {
    let bucket = bucket_for(keywords);
    format!(
        "{} {} + {}",
        NAME_PREFIX,
        bucket.label(),
        qualifier(keywords, damage_type)
    )
}
