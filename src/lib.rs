// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Boxscope
//!
//! Wireframe visualizer for perception output: a reference ("Main") box at the
//! origin and labeled oriented boxes around it, drawn through a pluggable
//! display backend.

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
pub mod utils;

pub use config::{AxisBounds, CategoryColorTable, VisualizerConfig};
pub use error::{Result, VisualizerError};
pub use geometry::{build_edges, compute_corners, OrientedBox, Vertex8, Wireframe};
pub use io::parse_objects;
pub use render::{DisplayBackend, DrawCommand, FrameRenderer, FrameSummary};

/// Render one frame of objects described as JSON records
pub fn render_json(
    source: &str,
    config: &VisualizerConfig,
    backend: &mut dyn DisplayBackend,
) -> Result<FrameSummary> {
    let objects = parse_objects(source)?;
    FrameRenderer::new(config).render_frame(&objects, backend)
}
