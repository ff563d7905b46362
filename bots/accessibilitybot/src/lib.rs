// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibilitybot - heuristic accessibility checks for a single HTML page
//!
//! Runs a fixed battery of regex checks over `index.html` and sorts the
//! results into issues and recommendations. The counts feed an estimated
//! score. It is a quick smoke test, not a WCAG audit.
//!
//! ## Checks
//!
//! - **Alt Text**: `<img>` without `alt`, decorative `alt=""`
//! - **Forms**: `<input>` tags outnumbering `<label for>` tags
//! - **Headings**: first heading not `h1`, skipped levels
//! - **Document**: `lang`, viewport meta, skip links, focus handling
//! - **Contrast**: colors used without any mention of contrast
//! - **Keyboard**: interactive element count, missing or negative tabindex

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod findings;
pub mod metrics;
pub mod report;
pub mod scanner;
pub mod score;
