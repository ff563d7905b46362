// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for accessibilitybot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccessibilityError>;

#[derive(Error, Debug)]
pub enum AccessibilityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for AccessibilityError {
    fn from(err: toml::de::Error) -> Self {
        AccessibilityError::Config(format!("TOML parse error: {}", err))
    }
}
