//! Identifiers for host-owned entities.
//!
//! Host IDs are opaque strings minted by the host runtime; the core never
//! inspects them beyond equality. Token handles are small string keys the
//! host can resolve back to its own token objects, so the core stays free of
//! any host object model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a visual token on the current scene (small string key).
pub type TokenHandle = String;

/// ID of a game actor (the acting entity in the rules model).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

/// ID of a placed token (the visual representation of an actor).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub String);

impl ActorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TokenId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        ActorId(s.to_string())
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        TokenId(s.to_string())
    }
}
