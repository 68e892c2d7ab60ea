// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Rendering: frame orchestration and the display backends it drives

mod color;
mod command_log;
mod frame;
mod png;
mod recorder;

pub use color::Rgb8;
pub use command_log::CommandLogBackend;
pub use frame::{FrameRenderer, FrameSummary, MARKER_COLOR};
pub use png::{PngBackend, ViewOptions};
pub use recorder::RecordingBackend;

use crate::config::AxisBounds;
use crate::error::{Result, VisualizerError};
use nalgebra::Point3;
use serde::Serialize;

/// One instruction for a display backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DrawCommand {
    SetAxisBounds(AxisBounds),
    /// Consecutive points are joined by straight segments
    Polyline {
        points: Vec<Point3<f64>>,
        color: String,
    },
    Present,
}

impl DrawCommand {
    pub fn polyline(points: impl Into<Vec<Point3<f64>>>, color: impl Into<String>) -> Self {
        Self::Polyline {
            points: points.into(),
            color: color.into(),
        }
    }
}

/// Anything that can show a frame: a window, an image file, a test recorder.
///
/// The renderer issues `set_axis_bounds` first, then polylines, then `present`.
pub trait DisplayBackend {
    fn set_axis_bounds(&mut self, bounds: &AxisBounds) -> Result<()>;

    /// Draw connected segments through `points` (at least two) in `color`
    fn draw_polyline(&mut self, points: &[Point3<f64>], color: &str) -> Result<()>;

    /// Show or flush the frame
    fn present(&mut self) -> Result<()>;

    fn execute(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            DrawCommand::SetAxisBounds(bounds) => self.set_axis_bounds(bounds),
            DrawCommand::Polyline { points, color } => self.draw_polyline(points, color),
            DrawCommand::Present => self.present(),
        }
    }
}

pub(crate) fn ensure_polyline(points: &[Point3<f64>]) -> Result<()> {
    if points.len() < 2 {
        return Err(VisualizerError::Backend(format!(
            "polyline needs at least 2 points, got {}",
            points.len()
        )));
    }
    Ok(())
}
