//! Canonical action record, real or synthesized.
//!
//! When the upstream payload cannot be resolved to a real inventory item, a
//! minimal stand-in is fabricated: identity from a slugified name plus a
//! creation timestamp (uniqueness only), damage fields copied off the event,
//! delivery derived from the payload keywords. Synthetic records live for one
//! event and are never persisted.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use strikecue_api::{DamageEvent, ItemRecord};

/// How an attack is delivered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Delivery {
    Melee,
    Ranged,
}

/// The triggering ability/item, normalized from whichever resolution
/// strategy succeeded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,
    pub name: String,
    /// Tags authored on the item itself (may be empty for synthetic records).
    pub keywords: Vec<String>,
    /// Bridge-specific custom animation attachment, when configured.
    pub animation_override: Option<String>,
    pub delivery: Delivery,
    pub damage_amount: i32,
    pub damage_type: String,
    /// True when this record was fabricated rather than resolved.
    pub synthetic: bool,
}

impl ActionRecord {
    /// Build from a resolved real item. Items without an id are not accepted
    /// here; the caller synthesizes instead.
    pub fn from_item(item: &ItemRecord, event: &DamageEvent) -> Option<Self> {
        let id = item.id.clone()?;
        Some(Self {
            id,
            name: item.name.clone(),
            keywords: item.keywords.clone(),
            animation_override: item.animation_override.clone(),
            delivery: delivery_from_payload(event),
            damage_amount: event.amount,
            damage_type: event
                .damage_type
                .clone()
                .unwrap_or_else(|| "bludgeoning".to_string()),
            synthetic: false,
        })
    }

    /// Fabricate a stand-in action when no real item resolves.
    pub fn synthesize(name: &str, event: &DamageEvent) -> Self {
        Self {
            id: format!("synthetic-{}-{}", slug(name), unix_millis()),
            name: name.to_string(),
            keywords: Vec::new(),
            animation_override: None,
            delivery: delivery_from_payload(event),
            damage_amount: if event.amount != 0 { event.amount } else { 1 },
            damage_type: event
                .damage_type
                .clone()
                .unwrap_or_else(|| "bludgeoning".to_string()),
            synthetic: true,
        }
    }
}

/// Ranged iff the payload carries the case-sensitive `"Ranged"` keyword
/// token, matching how the upstream rules plugin authors it.
fn delivery_from_payload(event: &DamageEvent) -> Delivery {
    if event.keywords.iter().any(|k| k == "Ranged") {
        Delivery::Ranged
    } else {
        Delivery::Melee
    }
}

/// Lowercase, whitespace runs collapsed to single hyphens.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slug("Quick  Strike"), "quick-strike");
        assert_eq!(slug("Firebolt"), "firebolt");
    }

    #[test]
    fn synthetic_delivery_is_case_sensitive() {
        let mut event = DamageEvent {
            keywords: vec!["ranged".into()],
            ..Default::default()
        };
        // lowercase token does not count as ranged
        assert_eq!(
            ActionRecord::synthesize("Attack", &event).delivery,
            Delivery::Melee
        );
        event.keywords = vec!["Ranged".into()];
        assert_eq!(
            ActionRecord::synthesize("Attack", &event).delivery,
            Delivery::Ranged
        );
    }

    #[test]
    fn synthetic_id_carries_slug() {
        let event = DamageEvent::default();
        let action = ActionRecord::synthesize("Quick Strike", &event);
        assert!(action.id.starts_with("synthetic-quick-strike-"));
        assert!(action.synthetic);
        assert_eq!(action.damage_amount, 1);
        assert_eq!(action.damage_type, "bludgeoning");
    }
}
