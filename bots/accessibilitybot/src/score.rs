// SPDX-License-Identifier: PMPL-1.0-or-later
//! Estimated accessibility score.
//!
//! 100 minus 10 per issue and 5 per navigation issue, floored at 0. The
//! constants and the 90/70 bands are fixed so scores stay comparable between
//! runs; this is a presentation heuristic, not an audit result.

use crate::findings::FindingKind;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u32 = 100;

/// Score band shown under the score line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    NeedsAttention,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Verdict::Excellent
        } else if score >= 70 {
            Verdict::Good
        } else {
            Verdict::NeedsAttention
        }
    }

    /// Line printed for this band
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Excellent => "🟢 Excellent accessibility foundation!",
            Verdict::Good => "🟡 Good accessibility, with room for improvement",
            Verdict::NeedsAttention => "🔴 Accessibility needs attention",
        }
    }
}

/// Compute the score from finding counts
pub fn accessibility_score(issues: usize, nav_issues: usize) -> u32 {
    let penalty = (issues as u64)
        .saturating_mul(u64::from(FindingKind::Issue.penalty()))
        .saturating_add((nav_issues as u64).saturating_mul(u64::from(FindingKind::Navigation.penalty())));
    u64::from(MAX_SCORE).saturating_sub(penalty) as u32
}
