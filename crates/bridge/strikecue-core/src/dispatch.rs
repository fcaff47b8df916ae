//! Event handling and tiered playback dispatch.
//!
//! The Bridge is the application context: constructed once with a typed
//! config, handed the host capabilities per call. Guard chain first
//! (authorization, availability, structural validity; each failing as a
//! silent skip), then the fallback chain: custom override effect, exact-name
//! database match, classification-generated name. A failure at the final
//! tier is logged and swallowed; nothing escapes `handle_event`.

use hashbrown::HashSet;

use strikecue_api::{
    CatalogCategory, DamageEvent, DirectedEffect, EffectsEngine, GameWorld, Notifier,
    PlaybackEngine,
};

use crate::catalog::{scan_catalog, CatalogReport, EXPECTED_TOTAL};
use crate::config::BridgeConfig;
use crate::normalize::normalize;
use crate::request::AnimationRequest;
use crate::select::select_animation;

/// Host capability bundle, passed per call. Adapters own the underlying
/// plugin connections; the core only borrows them for the duration of one
/// event.
pub struct HostCapabilities<'a> {
    pub world: &'a dyn GameWorld,
    pub playback: &'a mut dyn PlaybackEngine,
    pub effects: &'a mut dyn EffectsEngine,
    pub notifier: &'a mut dyn Notifier,
}

/// The bridge itself. Long-lived state is limited to the config, the cached
/// availability probe, and two once-per-session flags.
#[derive(Debug)]
pub struct Bridge {
    cfg: BridgeConfig,
    /// Result of the first availability probe, cached for the session.
    available: Option<bool>,
    warned_unavailable: bool,
    catalog_checked: bool,
}

impl Bridge {
    pub fn new(cfg: BridgeConfig) -> Self {
        Self {
            cfg,
            available: None,
            warned_unavailable: false,
            catalog_checked: false,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.cfg
    }

    /// Per-event trace lines, gated behind the debug toggle.
    fn trace(&self, message: &str) {
        if self.cfg.debug {
            log::debug!("{message}");
        }
    }

    /// Entry point for one inbound combat event. Never panics or propagates;
    /// every failure mode ends in a log line at most.
    pub fn handle_event(&mut self, event: &DamageEvent, host: &mut HostCapabilities<'_>) {
        if !self.cfg.enabled {
            self.trace("integration disabled, ignoring event");
            return;
        }
        // Normalization logs why an event was skipped (healing at debug,
        // resolution failures at warn) and the pipeline stops there.
        if let Ok(request) = normalize(event, host.world) {
            log::info!("animation triggered for {}", request.action.name);
            self.dispatch(&request, host);
        }
    }

    /// Both the playback plugin and its required effects sub-dependency must
    /// report active. Probed once, then cached for the session.
    fn availability(&mut self, host: &HostCapabilities<'_>) -> bool {
        *self
            .available
            .get_or_insert_with(|| host.playback.is_active() && host.effects.is_active())
    }

    /// Guarded, tiered dispatch for an already-normalized request.
    pub fn dispatch(&mut self, request: &AnimationRequest, host: &mut HostCapabilities<'_>) {
        if !host.world.is_gm() && !host.world.owns_actor(&request.source_actor) {
            self.trace("skipping animation: invoker is neither owner nor GM");
            return;
        }

        if !self.availability(host) {
            self.trace("skipping animation: playback capability not available");
            if !self.warned_unavailable {
                self.warned_unavailable = true;
                host.notifier.notify(
                    "Animation playback or its effects dependency is not available. Animations will not play.",
                    true,
                );
            }
            return;
        }

        if !request.is_valid() {
            log::debug!("skipping structurally invalid request for {}", request.action.name);
            return;
        }

        // Tier 1: custom override via the effects engine, one directed
        // effect per target committed as a single sequence.
        if let Some(asset) = &request.action.animation_override {
            if host.effects.is_active() {
                let batch: Vec<DirectedEffect> = request
                    .targets
                    .iter()
                    .map(|target| DirectedEffect {
                        asset: asset.clone(),
                        from: request.source.clone(),
                        to: target.clone(),
                    })
                    .collect();
                match host.effects.play_directed(&batch) {
                    Ok(()) => {
                        self.trace(&format!("played custom override {asset}"));
                        return;
                    }
                    Err(err) => {
                        log::debug!("effects engine failed for {asset}: {err}; falling back to name lookup");
                    }
                }
            } else {
                self.trace("effects engine inactive, falling back to name lookup");
            }
        }

        // Tier 2: the action's bare name, when it already has a database entry.
        if name_in_database(host.playback, &request.action.name) {
            self.trace(&format!(
                "found \"{}\" in the animation database",
                request.action.name
            ));
            match self.play_named(request, &request.action.name, host) {
                Ok(()) => return,
                Err(err) => {
                    log::debug!("playback failed for {}: {err}", request.action.name);
                }
            }
        }

        // Tier 3: classification fallback; total, so always worth attempting.
        let generated = select_animation(&request.keywords, request.damage_type.as_deref());
        self.trace(&format!("using generated animation {generated}"));
        if let Err(err) = self.play_named(request, &generated, host) {
            log::warn!(
                "animation dispatch exhausted for {} ({generated}): {err}",
                request.action.name
            );
        }
    }

    fn play_named(
        &self,
        request: &AnimationRequest,
        name: &str,
        host: &mut HostCapabilities<'_>,
    ) -> anyhow::Result<()> {
        host.playback
            .play_named(&request.source, name, &request.targets, &request.hit_targets)
    }

    /// One-time post-ready catalog integrity check. Hosts call this from
    /// their ready signal and again from a timeout safety net; the session
    /// flag makes the second call free. GM-only advisory, not a dispatch
    /// dependency.
    pub fn verify_catalog(&mut self, host: &mut HostCapabilities<'_>) -> Option<CatalogReport> {
        if self.catalog_checked {
            return None;
        }
        if !host.world.is_gm() {
            return None;
        }
        if !host.playback.is_active() {
            log::debug!("playback capability not active, skipping catalog check");
            return None;
        }
        self.catalog_checked = true;

        let report = scan_catalog(host.playback);
        let total = report.total();
        if total == 0 || report.is_partial() || report.missing_category() {
            let message = if total == 0 {
                "No fallback animations found in the animation database.".to_string()
            } else {
                format!("Incomplete fallback animations found ({total}/{EXPECTED_TOTAL} entries).")
            };
            host.notifier.notify(
                &format!("{message} Import the bridge catalog via the animation database's merge menu."),
                false,
            );
            log::warn!("fallback catalog missing or incomplete ({total} entries found)");
        } else {
            log::info!(
                "found {total} fallback animations ({} melee, {} range, {} on token)",
                report.melee,
                report.range,
                report.on_token
            );
        }
        Some(report)
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

/// Exact-name availability probe across all database categories. A category
/// that fails to read simply contributes nothing.
fn name_in_database(playback: &dyn PlaybackEngine, name: &str) -> bool {
    let mut labels: HashSet<String> = HashSet::new();
    for category in CatalogCategory::ALL {
        if let Ok(entries) = playback.read_category(category) {
            labels.extend(entries.into_iter().map(|e| e.label));
        }
    }
    labels.contains(name)
}
