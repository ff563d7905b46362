// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding types shared by the heuristic checks and the report renderer.
//!
//! A finding is a single line of the report: a stable rule identifier, the
//! bucket it lands in, and the message printed to the console.

use serde::{Deserialize, Serialize};

/// Which report section a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Likely accessibility defect, costs 10 points
    Issue,
    /// Advisory only, does not affect the score
    Recommendation,
    /// Keyboard navigation concern, costs 5 points
    Navigation,
}

impl FindingKind {
    /// Points deducted from the score for each finding of this kind
    pub fn penalty(&self) -> u32 {
        match self {
            FindingKind::Issue => 10,
            FindingKind::Recommendation => 0,
            FindingKind::Navigation => 5,
        }
    }
}

/// A single heuristic finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule identifier (e.g., "img-missing-alt")
    pub rule_id: String,
    /// Report section
    pub kind: FindingKind,
    /// Message as printed in the text report
    pub message: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(rule_id: &str, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            kind,
            message: message.into(),
        }
    }

    pub fn issue(rule_id: &str, message: impl Into<String>) -> Self {
        Self::new(rule_id, FindingKind::Issue, message)
    }

    pub fn recommendation(rule_id: &str, message: impl Into<String>) -> Self {
        Self::new(rule_id, FindingKind::Recommendation, message)
    }

    pub fn navigation(rule_id: &str, message: impl Into<String>) -> Self {
        Self::new(rule_id, FindingKind::Navigation, message)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Findings collected from one document, one bucket per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSet {
    pub issues: Vec<Finding>,
    pub recommendations: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<Finding>,
}

impl FindingSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding into the bucket of its kind
    pub fn add(&mut self, finding: Finding) {
        match finding.kind {
            FindingKind::Issue => self.issues.push(finding),
            FindingKind::Recommendation => self.recommendations.push(finding),
            FindingKind::Navigation => self.navigation.push(finding),
        }
    }

    /// Messages of all issues, in check order
    pub fn issue_messages(&self) -> Vec<&str> {
        self.issues.iter().map(|f| f.message.as_str()).collect()
    }

    /// Messages of all recommendations, in check order
    pub fn recommendation_messages(&self) -> Vec<&str> {
        self.recommendations.iter().map(|f| f.message.as_str()).collect()
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.issues.len() + self.recommendations.len() + self.navigation.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
