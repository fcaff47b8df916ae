//! Keyword set and the diagnostic primary-keyword selector.
//!
//! Keywords arrive with whatever casing the upstream data was authored in.
//! The set preserves case and insertion order (order is irrelevant to
//! selection, but keeping it makes logs match the source data); all
//! membership checks are case-insensitive.
//!
//! `primary_keyword` is a separate, fixed 5-tier priority scheme used only
//! for diagnostics during normalization. It is NOT the element list the
//! selector uses for bucket/qualifier resolution; the two priority schemes
//! are distinct and must not be conflated.

use serde::{Deserialize, Serialize};

/// Case-preserving keyword collection with case-insensitive membership.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Original-cased keywords in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        KeywordSet(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for KeywordSet {
    fn from(keywords: &[&str]) -> Self {
        keywords.iter().copied().collect()
    }
}

const TIER_ELEMENT: [&str; 5] = ["earth", "fire", "green", "void", "rot"];
const TIER_PSYCHIC: [&str; 6] = [
    "psionic",
    "telekinesis",
    "telepathy",
    "animapathy",
    "chronopathy",
    "resopathy",
];
const TIER_SPECIAL: [&str; 4] = [
    "metamorphosis",
    "performance",
    "cryokinesis",
    "pyrokinesis",
];
const TIER_AREA: [&str; 1] = ["area"];
const TIER_COMBAT: [&str; 3] = ["melee", "ranged", "charge"];

/// Pick one "primary" keyword for diagnostics: scan the tiers in fixed
/// priority order and return the first set member (original casing) matching
/// any tier entry; fall back to the first keyword, or None for an empty set.
pub fn primary_keyword(keywords: &KeywordSet) -> Option<&str> {
    let tiers: [&[&str]; 5] = [
        &TIER_ELEMENT,
        &TIER_PSYCHIC,
        &TIER_SPECIAL,
        &TIER_AREA,
        &TIER_COMBAT,
    ];
    for tier in tiers {
        if let Some(hit) = keywords
            .iter()
            .find(|k| tier.iter().any(|t| k.eq_ignore_ascii_case(t)))
        {
            return Some(hit);
        }
    }
    keywords.first()
}
