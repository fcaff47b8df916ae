//! Capability traits at the host seam.
//!
//! The core never probes for global host symbols; adapters implement these
//! traits and pass them in, so the pipeline can run (and be tested) without
//! the host runtime present. Fallible calls return `anyhow::Result`: the
//! host bubbles whatever error its plugin surface produced, and the core
//! decides per call site whether that means "fall back" or "skip".

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, TokenHandle, TokenId};
use crate::world::ActorRef;

/// The three fixed categories the external animation database is split into.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CatalogCategory {
    Melee,
    Range,
    OnToken,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 3] = [
        CatalogCategory::Melee,
        CatalogCategory::Range,
        CatalogCategory::OnToken,
    ];
}

/// One entry of an animation database category. Records carry more fields on
/// the host side; only the label matters here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
}

/// One directed visual effect, anchored at `from` and stretched to `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectedEffect {
    /// Effect-asset path understood by the effects engine.
    pub asset: String,
    pub from: TokenHandle,
    pub to: TokenHandle,
}

/// Read access to the host's scene/actor model, plus the invoking client's
/// identity (role and ownership), which gates dispatch.
pub trait GameWorld {
    /// Look up an actor by id, with its inventory.
    fn actor(&self, id: &ActorId) -> Option<ActorRef>;

    /// Resolve an explicit token id on the current scene.
    fn token(&self, id: &TokenId) -> Option<TokenHandle>;

    /// All current-scene tokens whose owning actor matches `actor`, in scene
    /// order.
    fn tokens_for_actor(&self, actor: &ActorId) -> Vec<TokenHandle>;

    /// Whether the invoking client holds the game-master role.
    fn is_gm(&self) -> bool;

    /// Whether the invoking client owns the given actor.
    fn owns_actor(&self, actor: &ActorId) -> bool;
}

/// The external animation-playback plugin.
pub trait PlaybackEngine {
    fn is_active(&self) -> bool;

    /// Play a database animation by name against the given tokens.
    fn play_named(
        &mut self,
        source: &TokenHandle,
        name: &str,
        targets: &[TokenHandle],
        hit_targets: &[TokenHandle],
    ) -> Result<()>;

    /// Read one database category, in stored order. Read-only.
    fn read_category(&self, category: CatalogCategory) -> Result<Vec<CatalogEntry>>;
}

/// The visual-effects engine (the playback plugin's required sub-dependency).
pub trait EffectsEngine {
    fn is_active(&self) -> bool;

    /// Play a batch of directed effects as one committed sequence.
    fn play_directed(&mut self, effects: &[DirectedEffect]) -> Result<()>;
}

/// Non-blocking user-facing notification surface.
pub trait Notifier {
    fn notify(&mut self, message: &str, persistent: bool);
}

/// Generic key-value toggle storage for the two bridge settings.
pub trait SettingsStore {
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool);
}
