// SPDX-License-Identifier: PMPL-1.0-or-later
//! Baselinebot - structural and performance baseline of a static site
//!
//! Takes a snapshot of `index.html` and the `assets` directory next to it:
//! referenced resources, meta tags, accessibility markup counts, asset sizes
//! grouped by type, and a short list of optimization opportunities. The full
//! snapshot is written to `baseline-analysis.json`, replacing any earlier run.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod performance;
pub mod report;
pub mod scanner;
