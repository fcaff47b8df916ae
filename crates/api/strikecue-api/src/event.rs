//! Inbound event contract from the rules plugin.
//!
//! One event type, delivered once per damage application. Upstream payloads
//! are heterogeneous: every field except the source actor may be missing, so
//! everything defaults and deserialization is lenient. Normalization in the
//! core turns this into a canonical request or rejects it.

use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, TokenId};
use crate::world::ItemRecord;

/// Combat event payload as emitted by the rules plugin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageEvent {
    /// ID of the acting entity. Required for a usable event.
    pub source_actor_id: ActorId,
    /// Explicit source token, when the rules plugin knows it.
    pub source_token_id: Option<TokenId>,
    /// Explicit target token. There is no fallback search for targets.
    pub target_token_id: Option<TokenId>,
    /// Damage amount; zero or negative means nothing actually landed.
    pub amount: i32,
    pub damage_type: Option<String>,
    /// Healing events never trigger animations.
    pub is_healing: bool,
    /// Classification tags, case preserved as authored.
    pub keywords: Vec<String>,
    pub source_item_name: Option<String>,
    pub source_item_id: Option<String>,
    /// Full embedded item object, when the rules plugin forwards one.
    pub source_item: Option<ItemRecord>,
}

impl DamageEvent {
    /// Parse a raw host payload. Unknown fields are ignored.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_payload() {
        let ev = DamageEvent::from_json(json!({
            "sourceActorId": "abc123",
            "targetTokenId": "def456",
            "amount": 15,
            "damageType": "fire",
            "keywords": ["Fire", "Magic"],
            "sourceItemName": "Firebolt"
        }))
        .unwrap();
        assert_eq!(ev.source_actor_id.as_str(), "abc123");
        assert_eq!(ev.target_token_id.as_ref().unwrap().as_str(), "def456");
        assert_eq!(ev.amount, 15);
        assert!(!ev.is_healing);
        assert!(ev.source_token_id.is_none());
        assert!(ev.source_item.is_none());
    }

    #[test]
    fn missing_fields_default() {
        let ev = DamageEvent::from_json(json!({ "sourceActorId": "a" })).unwrap();
        assert_eq!(ev.amount, 0);
        assert!(ev.keywords.is_empty());
        assert!(ev.damage_type.is_none());
    }
}
