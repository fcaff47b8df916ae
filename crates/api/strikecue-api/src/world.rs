//! Host views of actors and their inventory.
//!
//! These are plain owned records the host hands the core on lookup. They
//! carry only the fields normalization needs; the host's full object model
//! stays on the host side.

use serde::{Deserialize, Serialize};

use crate::ids::ActorId;

/// Host view of an ability or item an actor carries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    /// Host-assigned identity. Absent on partial payload embeds; an embedded
    /// item without an id is not trusted as a real item.
    pub id: Option<String>,
    pub name: String,
    /// Classification tags as authored on the item (case preserved).
    pub keywords: Vec<String>,
    /// Per-action custom animation attachment: an effect-asset path
    /// configured on the item for this bridge.
    pub animation_override: Option<String>,
}

/// Host view of an actor and its inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ActorRef {
    /// Look up an inventory item by host id.
    pub fn item_by_id(&self, id: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|i| i.id.as_deref() == Some(id))
    }

    /// Look up an inventory item by exact name; first match wins on ties.
    pub fn item_by_name(&self, name: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|i| i.name == name)
    }
}
