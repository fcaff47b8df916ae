//! strikecue-api: host capability surface (core, engine-agnostic)
//!
//! Contracts shared between the bridge core and whichever host adapter embeds
//! it: opaque handles into the host's scene/actor model, the inbound combat
//! event payload, and the capability traits the core calls out through.

pub mod capability;
pub mod event;
pub mod ids;
pub mod world;

pub use capability::{
    CatalogCategory, CatalogEntry, DirectedEffect, EffectsEngine, GameWorld, Notifier,
    PlaybackEngine, SettingsStore,
};
pub use event::DamageEvent;
pub use ids::{ActorId, TokenHandle, TokenId};
pub use world::{ActorRef, ItemRecord};
