// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Error types shared by geometry, configuration and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or drawing a frame
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// A box dimension was zero, negative or NaN
    #[error("invalid {field}: {value} (must be > 0)")]
    InvalidDimension { field: &'static str, value: f64 },

    /// A surrounding object used the category reserved for the ego box
    #[error("category \"Main\" is reserved for the reference box")]
    ReservedCategory,

    /// The color table has no entry for this category
    #[error("no color configured for category \"{0}\"")]
    UnknownCategory(String),

    /// An object record could not be turned into a box
    #[error("invalid object record: {0}")]
    InvalidInput(String),

    #[error("failed to load config {}: {reason}", path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// The display backend refused a command
    #[error("display backend error: {0}")]
    Backend(String),
}

impl VisualizerError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, VisualizerError>;
