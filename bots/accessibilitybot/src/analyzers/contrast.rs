// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast reminder
//!
//! No ratios are computed. A document that sets colors but never mentions
//! contrast gets a reminder to verify the WCAG AA ratio by hand.

use crate::analyzers::Check;
use crate::findings::Finding;

/// Contrast reminder check
pub struct ContrastCheck;

impl Check for ContrastCheck {
    fn name(&self) -> &str {
        "Contrast Reminder"
    }

    fn description(&self) -> &str {
        "Reminds about contrast when colors are used without mention of contrast"
    }

    fn check(&self, html: &str) -> Vec<Finding> {
        let lower = html.to_lowercase();

        if lower.contains("color") && !lower.contains("contrast") {
            vec![Finding::recommendation(
                "contrast-unverified",
                "Ensure color contrast meets WCAG AA standards (4.5:1 for normal text)",
            )]
        } else {
            Vec::new()
        }
    }
}
