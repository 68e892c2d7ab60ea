// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Visualizer configuration: axis bounds and the category color table
//!
//! The on-disk layout follows the sensor tooling's `config.json`:
//!
//! ```json
//! {
//!     "X-Axis": [-20, 20],
//!     "Y-Axis": [-20, 20],
//!     "Z-Axis": [0, 10],
//!     "CategoryColors": { "Main": "blue", "Car": "red" }
//! }
//! ```
//!
//! The same keys are accepted from TOML. Configuration is loaded once by the
//! caller and handed to the renderer by reference.

use crate::error::{Result, VisualizerError};
use crate::geometry::MAIN_CATEGORY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Display extents for each axis as `[min, max]`. Geometry outside is not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    #[serde(rename = "X-Axis")]
    pub x: [f64; 2],
    #[serde(rename = "Y-Axis")]
    pub y: [f64; 2],
    #[serde(rename = "Z-Axis")]
    pub z: [f64; 2],
}

impl AxisBounds {
    pub fn new(x: [f64; 2], y: [f64; 2], z: [f64; 2]) -> Self {
        Self { x, y, z }
    }

    /// Span of each axis, `max - min`
    pub fn spans(&self) -> [f64; 3] {
        [self.x, self.y, self.z].map(|[min, max]| max - min)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, [min, max]) in [("X-Axis", self.x), ("Y-Axis", self.y), ("Z-Axis", self.z)] {
            if !min.is_finite() || !max.is_finite() {
                return Err(format!("{name} bounds must be finite, got [{min}, {max}]"));
            }
            if min >= max {
                return Err(format!("{name} min must be below max, got [{min}, {max}]"));
            }
        }
        Ok(())
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::new([-20.0, 20.0], [-20.0, 20.0], [0.0, 10.0])
    }
}

/// Category label to color identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryColorTable(BTreeMap<String, String>);

impl CategoryColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: impl Into<String>, color: impl Into<String>) -> Self {
        self.insert(category, color);
        self
    }

    pub fn insert(&mut self, category: impl Into<String>, color: impl Into<String>) {
        self.0.insert(category.into(), color.into());
    }

    /// Color for a category, `None` when the table has no entry
    pub fn get(&self, category: &str) -> Option<&str> {
        self.0.get(category).map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the renderer needs besides the objects themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    #[serde(flatten)]
    pub axis_bounds: AxisBounds,
    #[serde(rename = "CategoryColors")]
    pub colors: CategoryColorTable,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            axis_bounds: AxisBounds::default(),
            colors: CategoryColorTable::new()
                .with(MAIN_CATEGORY, "blue")
                .with("Car", "red"),
        }
    }
}

impl VisualizerConfig {
    pub fn new(axis_bounds: AxisBounds, colors: CategoryColorTable) -> Self {
        Self {
            axis_bounds,
            colors,
        }
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| VisualizerError::config(path, e))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            toml::from_str::<Self>(&content).map_err(|e| VisualizerError::config(path, e))?
        } else {
            serde_json::from_str::<Self>(&content).map_err(|e| VisualizerError::config(path, e))?
        };
        config
            .validate()
            .map_err(|reason| VisualizerError::config(path, reason))?;

        info!(
            "Loaded config from {} ({} categories)",
            path.display(),
            config.colors.len()
        );
        debug!(?config, "config contents");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| VisualizerError::config("<json>", e))?;
        config
            .validate()
            .map_err(|reason| VisualizerError::config("<json>", reason))?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| VisualizerError::config("<toml>", e))?;
        config
            .validate()
            .map_err(|reason| VisualizerError::config("<toml>", reason))?;
        Ok(config)
    }

    /// Bounds must be ordered and finite, and the table must color the Main box
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.axis_bounds.validate()?;
        if self.colors.is_empty() {
            return Err("CategoryColors is empty".to_string());
        }
        if !self.colors.contains(MAIN_CATEGORY) {
            return Err(format!("CategoryColors has no \"{MAIN_CATEGORY}\" entry"));
        }
        Ok(())
    }

    /// Serialize back to the JSON layout
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| VisualizerError::config("<json>", e))
    }
}
