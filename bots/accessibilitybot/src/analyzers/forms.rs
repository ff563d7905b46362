// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labelling check
//!
//! Compares the number of `<input>` tags against `<label for="...">` tags.
//! It does not pair labels with inputs by id; it only flags a shortfall.

use crate::analyzers::Check;
use crate::findings::Finding;
use regex::Regex;
use std::sync::LazyLock;

static INPUT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<input[^>]*>").expect("valid regex"));

static LABEL_FOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<label[^>]*for=["'](.*?)["'][^>]*>"#).expect("valid regex")
});

/// Form label coverage check
pub struct FormLabelCheck;

impl Check for FormLabelCheck {
    fn name(&self) -> &str {
        "Form Label Check"
    }

    fn description(&self) -> &str {
        "Flags documents with more <input> tags than <label for> tags"
    }

    fn check(&self, html: &str) -> Vec<Finding> {
        let inputs = INPUT_TAG.find_iter(html).count();
        let labels = LABEL_FOR.find_iter(html).count();

        if inputs > labels {
            vec![Finding::issue(
                "form-label-mismatch",
                format!(
                    "Potential form accessibility issue: {} inputs vs {} labels",
                    inputs, labels
                ),
            )]
        } else {
            Vec::new()
        }
    }
}
