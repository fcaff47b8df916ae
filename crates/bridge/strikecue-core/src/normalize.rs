//! Payload normalization.
//!
//! Turns an arbitrary upstream combat event into a valid AnimationRequest or
//! fails closed. Every resolution failure aborts the whole pipeline for this
//! event; no partial animation is ever attempted. Item resolution is the one
//! step that cannot fail, since it bottoms out in a synthesized action.
//!
//! Source and target token resolution are deliberately asymmetric: the
//! source falls back to a current-scene scan by owning actor, the target
//! resolves by explicit id only.

use thiserror::Error;

use strikecue_api::{ActorId, ActorRef, DamageEvent, GameWorld, TokenHandle, TokenId};

use crate::action::ActionRecord;
use crate::keywords::{primary_keyword, KeywordSet};
use crate::request::AnimationRequest;

/// Why an event produced no request.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// Healing events never trigger animations; a no-op, not a fault.
    #[error("healing event, no animation")]
    HealingEvent,

    #[error("source actor not found: {id}")]
    ActorNotFound { id: ActorId },

    #[error("no token on the current scene for actor {actor}")]
    SourceTokenNotFound { actor: ActorId },

    #[error("event carries no target token id")]
    TargetTokenMissing,

    #[error("target token not found: {id}")]
    TargetTokenNotFound { id: TokenId },
}

/// Normalize one event against the host world.
pub fn normalize(
    event: &DamageEvent,
    world: &dyn GameWorld,
) -> Result<AnimationRequest, NormalizeError> {
    if event.is_healing {
        log::debug!("skipping healing event from actor {}", event.source_actor_id);
        return Err(NormalizeError::HealingEvent);
    }

    let actor = world.actor(&event.source_actor_id).ok_or_else(|| {
        log::warn!("source actor not found: {}", event.source_actor_id);
        NormalizeError::ActorNotFound {
            id: event.source_actor_id.clone(),
        }
    })?;

    let source = resolve_source_token(event, &actor, world)?;
    let target = resolve_target_token(event, world)?;
    let action = resolve_action(event, &actor);

    // Prefer the resolved action's own tags; fall back to the payload's.
    let keywords: KeywordSet = if !action.keywords.is_empty() {
        action.keywords.iter().cloned().collect()
    } else {
        event.keywords.iter().cloned().collect()
    };

    if let Some(primary) = primary_keyword(&keywords) {
        log::debug!("primary keyword for {}: {}", action.name, primary);
    }

    let hit_targets = if event.amount > 0 {
        vec![target.clone()]
    } else {
        Vec::new()
    };

    Ok(AnimationRequest {
        source_actor: actor.id.clone(),
        source,
        targets: vec![target],
        action,
        keywords,
        damage_type: event.damage_type.clone(),
        hit_targets,
    })
}

/// Explicit token id when present, else the first current-scene token owned
/// by the source actor.
fn resolve_source_token(
    event: &DamageEvent,
    actor: &ActorRef,
    world: &dyn GameWorld,
) -> Result<TokenHandle, NormalizeError> {
    if let Some(id) = &event.source_token_id {
        if let Some(handle) = world.token(id) {
            return Ok(handle);
        }
    } else if let Some(handle) = world.tokens_for_actor(&actor.id).into_iter().next() {
        return Ok(handle);
    }
    log::warn!("source token not found for actor {}", actor.name);
    Err(NormalizeError::SourceTokenNotFound {
        actor: actor.id.clone(),
    })
}

/// Explicit token id only; no fallback search for targets.
fn resolve_target_token(
    event: &DamageEvent,
    world: &dyn GameWorld,
) -> Result<TokenHandle, NormalizeError> {
    let id = event.target_token_id.as_ref().ok_or_else(|| {
        log::warn!("event carries no target token id");
        NormalizeError::TargetTokenMissing
    })?;
    world.token(id).ok_or_else(|| {
        log::warn!("target token not found: {id}");
        NormalizeError::TargetTokenNotFound { id: id.clone() }
    })
}

/// Ordered fallback: embedded item with identity, inventory lookup by id,
/// inventory lookup by name (first match wins), synthesized stand-in.
///
/// Branch selection is by field presence, not lookup success: when the
/// payload names an item id that the inventory no longer holds, the name
/// strategy is not consulted and the action is synthesized.
fn resolve_action(event: &DamageEvent, actor: &ActorRef) -> ActionRecord {
    let resolved = if let Some(action) = event
        .source_item
        .as_ref()
        .and_then(|item| ActionRecord::from_item(item, event))
    {
        Some(action)
    } else if let Some(id) = &event.source_item_id {
        actor
            .item_by_id(id)
            .and_then(|item| ActionRecord::from_item(item, event))
    } else if let Some(name) = &event.source_item_name {
        actor
            .item_by_name(name)
            .and_then(|item| ActionRecord::from_item(item, event))
    } else {
        None
    };

    if let Some(action) = resolved {
        log::debug!("resolved real item {} ({})", action.name, action.id);
        return action;
    }

    let name = event
        .source_item_name
        .clone()
        .unwrap_or_else(|| {
            if actor.name.is_empty() {
                "Attack".to_string()
            } else {
                actor.name.clone()
            }
        });
    log::debug!("synthesizing action for {name}");
    ActionRecord::synthesize(&name, event)
}
