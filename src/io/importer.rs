// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Frame file importer

use crate::geometry::OrientedBox;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON file of object records for one frame
pub fn import_objects_file(path: impl AsRef<Path>) -> Result<Vec<OrientedBox>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read objects file: {}", path.display()))?;

    let objects = super::parse_objects(&source)
        .with_context(|| format!("Failed to parse objects file: {}", path.display()))?;
    debug!("Read {} objects from {}", objects.len(), path.display());
    Ok(objects)
}
