//! Fallback-catalog integrity check.
//!
//! The generated names only play if the matching entries were imported into
//! the external animation database. This check counts the bridge-prefixed
//! labels per category and reports when the catalog is empty, partial, or
//! missing an entire category. Diagnostic only; dispatch does not depend on
//! it.

use serde::{Deserialize, Serialize};

use strikecue_api::{CatalogCategory, PlaybackEngine};

/// Label prefix identifying bridge-owned database entries.
pub const NAME_PREFIX: &str = "[DS]";

/// Total entries across the three categories in the importable catalog.
pub const EXPECTED_TOTAL: usize = 27;

/// Per-category counts of bridge-prefixed entries found in the database.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub melee: usize,
    pub range: usize,
    pub on_token: usize,
}

impl CatalogReport {
    pub fn total(&self) -> usize {
        self.melee + self.range + self.on_token
    }

    /// Some entries present but not the full shipped set.
    pub fn is_partial(&self) -> bool {
        let total = self.total();
        total > 0 && total < EXPECTED_TOTAL
    }

    /// At least one whole category has no entries.
    pub fn missing_category(&self) -> bool {
        self.melee == 0 || self.range == 0 || self.on_token == 0
    }

    pub fn is_complete(&self) -> bool {
        self.total() >= EXPECTED_TOTAL && !self.missing_category()
    }
}

/// Count bridge-prefixed labels in each database category. A category that
/// fails to read counts as zero rather than failing the whole report.
pub fn scan_catalog(playback: &dyn PlaybackEngine) -> CatalogReport {
    let mut report = CatalogReport::default();
    for category in CatalogCategory::ALL {
        let count = match playback.read_category(category) {
            Ok(entries) => entries
                .iter()
                .filter(|e| e.label.starts_with(NAME_PREFIX))
                .count(),
            Err(err) => {
                log::warn!("failed to read animation database category {category:?}: {err}");
                0
            }
        };
        match category {
            CatalogCategory::Melee => report.melee = count,
            CatalogCategory::Range => report.range = count,
            CatalogCategory::OnToken => report.on_token = count,
        }
    }
    report
}
