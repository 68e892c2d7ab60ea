// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! JSON command-log backend, for replaying frames in other viewers

use super::{ensure_polyline, DisplayBackend, DrawCommand};
use crate::config::AxisBounds;
use crate::error::{Result, VisualizerError};
use nalgebra::Point3;
use serde_json::json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Buffers one frame of commands and writes them as JSON on `present`
pub struct CommandLogBackend {
    path: PathBuf,
    pending: Vec<DrawCommand>,
    frames_written: usize,
}

impl CommandLogBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pending: Vec::new(),
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    fn write_frame(&self) -> Result<()> {
        let io_err = |e: std::io::Error| {
            VisualizerError::Backend(format!("failed to write {}: {e}", self.path.display()))
        };

        let polylines = self
            .pending
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polyline { .. }))
            .count();
        let document = json!({
            "frame": self.frames_written,
            "polylines": polylines,
            "commands": self.pending,
        });

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &document)
            .map_err(|e| VisualizerError::Backend(e.to_string()))?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

impl DisplayBackend for CommandLogBackend {
    fn set_axis_bounds(&mut self, bounds: &AxisBounds) -> Result<()> {
        self.pending.clear();
        self.pending.push(DrawCommand::SetAxisBounds(*bounds));
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[Point3<f64>], color: &str) -> Result<()> {
        ensure_polyline(points)?;
        self.pending.push(DrawCommand::polyline(points, color));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.pending.push(DrawCommand::Present);
        self.write_frame()?;
        self.frames_written += 1;
        info!(
            "Command log for frame {} written to {}",
            self.frames_written,
            self.path.display()
        );
        self.pending.clear();
        Ok(())
    }
}
