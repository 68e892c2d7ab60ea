// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! In-memory backend that keeps every command it receives

use super::{ensure_polyline, DisplayBackend, DrawCommand};
use crate::config::AxisBounds;
use crate::error::Result;
use nalgebra::Point3;

#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    pub commands: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polylines drawn in the given color
    pub fn polylines_with_color<'a>(
        &'a self,
        color: &'a str,
    ) -> impl Iterator<Item = &'a [Point3<f64>]> + 'a {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Polyline { points, color: c } if c == color => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn polyline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polyline { .. }))
            .count()
    }

    pub fn presented(&self) -> bool {
        self.commands.last() == Some(&DrawCommand::Present)
    }
}

impl DisplayBackend for RecordingBackend {
    fn set_axis_bounds(&mut self, bounds: &AxisBounds) -> Result<()> {
        self.commands.push(DrawCommand::SetAxisBounds(*bounds));
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[Point3<f64>], color: &str) -> Result<()> {
        ensure_polyline(points)?;
        self.commands.push(DrawCommand::polyline(points, color));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
