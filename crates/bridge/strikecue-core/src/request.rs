//! Canonical animation request.
//!
//! Built once per event by normalization, consumed by selection and
//! dispatch. Invariants established upstream: non-empty targets, populated
//! action name, keyword comparisons case-insensitive via KeywordSet.

use serde::{Deserialize, Serialize};

use strikecue_api::{ActorId, TokenHandle};

use crate::action::ActionRecord;
use crate::keywords::KeywordSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    /// Acting entity, kept for the ownership guard at dispatch time.
    pub source_actor: ActorId,
    /// Acting visual token.
    pub source: TokenHandle,
    /// Target tokens, ordered; never empty for a valid request.
    pub targets: Vec<TokenHandle>,
    pub action: ActionRecord,
    pub keywords: KeywordSet,
    pub damage_type: Option<String>,
    /// Subsequence of `targets` that actually took effect; empty when the
    /// triggering amount was zero or negative.
    pub hit_targets: Vec<TokenHandle>,
}

impl AnimationRequest {
    /// Structural validity, re-checked defensively at dispatch even though
    /// normalization guarantees it.
    pub fn is_valid(&self) -> bool {
        !self.source.is_empty() && !self.targets.is_empty()
    }
}
