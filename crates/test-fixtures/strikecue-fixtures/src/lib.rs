//! Fake host capabilities for exercising the bridge without a host runtime.
//!
//! Every capability trait gets an in-memory double that records the calls it
//! receives; the playback and effects fakes can be scripted to fail so tier
//! fallback paths are reachable from tests.

use anyhow::{bail, Result};

use strikecue_api::{
    ActorId, ActorRef, CatalogCategory, CatalogEntry, DamageEvent, DirectedEffect, EffectsEngine,
    GameWorld, ItemRecord, Notifier, PlaybackEngine, SettingsStore, TokenHandle, TokenId,
};

/// In-memory scene/actor model with explicit ownership and role flags.
#[derive(Default)]
pub struct FakeWorld {
    pub actors: Vec<ActorRef>,
    /// (token id, owning actor id) pairs in scene order.
    pub tokens: Vec<(TokenId, ActorId)>,
    pub gm: bool,
    /// Actors the invoking client owns.
    pub owned: Vec<ActorId>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actor(mut self, actor: ActorRef) -> Self {
        self.actors.push(actor);
        self
    }

    /// Place a token for an actor on the current scene.
    pub fn with_token(mut self, token: &str, actor: &str) -> Self {
        self.tokens.push((TokenId::from(token), ActorId::from(actor)));
        self
    }

    pub fn as_gm(mut self) -> Self {
        self.gm = true;
        self
    }

    pub fn owning(mut self, actor: &str) -> Self {
        self.owned.push(ActorId::from(actor));
        self
    }
}

impl GameWorld for FakeWorld {
    fn actor(&self, id: &ActorId) -> Option<ActorRef> {
        self.actors.iter().find(|a| &a.id == id).cloned()
    }

    fn token(&self, id: &TokenId) -> Option<TokenHandle> {
        self.tokens
            .iter()
            .find(|(tid, _)| tid == id)
            .map(|(tid, _)| tid.0.clone())
    }

    fn tokens_for_actor(&self, actor: &ActorId) -> Vec<TokenHandle> {
        self.tokens
            .iter()
            .filter(|(_, owner)| owner == actor)
            .map(|(tid, _)| tid.0.clone())
            .collect()
    }

    fn is_gm(&self) -> bool {
        self.gm
    }

    fn owns_actor(&self, actor: &ActorId) -> bool {
        self.owned.contains(actor)
    }
}

/// One recorded `play_named` invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayedAnimation {
    pub source: TokenHandle,
    pub name: String,
    pub targets: Vec<TokenHandle>,
    pub hit_targets: Vec<TokenHandle>,
}

/// Playback double with a scripted catalog and recorded plays.
pub struct FakePlayback {
    pub active: bool,
    pub melee: Vec<String>,
    pub range: Vec<String>,
    pub on_token: Vec<String>,
    /// When set, every `play_named` call fails with this message.
    pub fail_with: Option<String>,
    pub played: Vec<PlayedAnimation>,
}

impl Default for FakePlayback {
    fn default() -> Self {
        Self {
            active: true,
            melee: Vec::new(),
            range: Vec::new(),
            on_token: Vec::new(),
            fail_with: None,
            played: Vec::new(),
        }
    }
}

impl FakePlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::default()
        }
    }

    /// Seed one category with labels.
    pub fn with_category<I, S>(mut self, category: CatalogCategory, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slot = match category {
            CatalogCategory::Melee => &mut self.melee,
            CatalogCategory::Range => &mut self.range,
            CatalogCategory::OnToken => &mut self.on_token,
        };
        slot.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Names of everything played, in order.
    pub fn played_names(&self) -> Vec<&str> {
        self.played.iter().map(|p| p.name.as_str()).collect()
    }
}

impl PlaybackEngine for FakePlayback {
    fn is_active(&self) -> bool {
        self.active
    }

    fn play_named(
        &mut self,
        source: &TokenHandle,
        name: &str,
        targets: &[TokenHandle],
        hit_targets: &[TokenHandle],
    ) -> Result<()> {
        self.played.push(PlayedAnimation {
            source: source.clone(),
            name: name.to_string(),
            targets: targets.to_vec(),
            hit_targets: hit_targets.to_vec(),
        });
        if let Some(message) = &self.fail_with {
            bail!("{message}");
        }
        Ok(())
    }

    fn read_category(&self, category: CatalogCategory) -> Result<Vec<CatalogEntry>> {
        let labels = match category {
            CatalogCategory::Melee => &self.melee,
            CatalogCategory::Range => &self.range,
            CatalogCategory::OnToken => &self.on_token,
        };
        Ok(labels
            .iter()
            .map(|label| CatalogEntry {
                label: label.clone(),
            })
            .collect())
    }
}

/// Effects double recording committed sequences.
pub struct FakeEffects {
    pub active: bool,
    /// When set, every `play_directed` call fails with this message.
    pub fail_with: Option<String>,
    /// One entry per committed sequence (batch of directed effects).
    pub sequences: Vec<Vec<DirectedEffect>>,
}

impl Default for FakeEffects {
    fn default() -> Self {
        Self {
            active: true,
            fail_with: None,
            sequences: Vec::new(),
        }
    }
}

impl FakeEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl EffectsEngine for FakeEffects {
    fn is_active(&self) -> bool {
        self.active
    }

    fn play_directed(&mut self, effects: &[DirectedEffect]) -> Result<()> {
        self.sequences.push(effects.to_vec());
        if let Some(message) = &self.fail_with {
            bail!("{message}");
        }
        Ok(())
    }
}

/// Notification double.
#[derive(Default)]
pub struct FakeNotifier {
    /// (message, persistent) pairs in emission order.
    pub messages: Vec<(String, bool)>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&mut self, message: &str, persistent: bool) {
        self.messages.push((message.to_string(), persistent));
    }
}

/// Key-value settings double.
#[derive(Default)]
pub struct MemorySettings {
    pub values: Vec<(String, bool)>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: bool) -> Self {
        self.values.push((key.to_string(), value));
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.push((key.to_string(), value));
    }
}

/// Actor builder keeping test setup terse.
pub fn actor(id: &str, name: &str, items: Vec<ItemRecord>) -> ActorRef {
    ActorRef {
        id: ActorId::from(id),
        name: name.to_string(),
        items,
    }
}

/// Inventory item builder.
pub fn item(id: &str, name: &str, keywords: &[&str]) -> ItemRecord {
    ItemRecord {
        id: Some(id.to_string()),
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        animation_override: None,
    }
}

/// Minimal damage event: source actor, target token, amount.
pub fn damage_event(source_actor: &str, target_token: &str, amount: i32) -> DamageEvent {
    DamageEvent {
        source_actor_id: ActorId::from(source_actor),
        target_token_id: Some(TokenId::from(target_token)),
        amount,
        ..Default::default()
    }
}
