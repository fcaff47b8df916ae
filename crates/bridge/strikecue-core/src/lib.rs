//! strikecue Core (engine-agnostic)
//!
//! Maps semantic combat events from a rules plugin onto animation-name
//! strings consumed by an animation-playback plugin. Three stages, composed
//! per inbound event: normalize the heterogeneous payload into a canonical
//! request, select an animation name from its classification tags, dispatch
//! through the host's playback capability with a tiered fallback chain.
//! No stage keeps state beyond a cached capability-availability flag.

pub mod action;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod keywords;
pub mod normalize;
pub mod request;
pub mod select;

// Re-exports for consumers (host adapters)
pub use action::{ActionRecord, Delivery};
pub use catalog::{CatalogReport, EXPECTED_TOTAL, NAME_PREFIX};
pub use config::{BridgeConfig, SETTING_DEBUG, SETTING_ENABLED};
pub use dispatch::{Bridge, HostCapabilities};
pub use keywords::{primary_keyword, KeywordSet};
pub use normalize::{normalize, NormalizeError};
pub use request::AnimationRequest;
pub use select::{bucket_for, select_animation, Bucket, ELEMENTS};
pub use strikecue_api::{
    ActorId, ActorRef, CatalogCategory, CatalogEntry, DamageEvent, DirectedEffect, EffectsEngine,
    GameWorld, ItemRecord, Notifier, PlaybackEngine, SettingsStore, TokenHandle, TokenId,
};
