// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for baselinebot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BaselineError>;

#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for BaselineError {
    fn from(err: toml::de::Error) -> Self {
        BaselineError::Config(format!("TOML parse error: {}", err))
    }
}
