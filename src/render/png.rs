// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Raster backend: draws frames into a PNG with a fixed orthographic 3D view

use super::{ensure_polyline, DisplayBackend, Rgb8};
use crate::config::AxisBounds;
use crate::error::{Result, VisualizerError};
use crate::geometry::{build_edges, compute_corners};
use image::RgbImage;
use nalgebra::{Point3, Vector2, Vector3};
use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 768;

/// Fraction of the smaller image side covered by a unit of normalized space
const VIEW_SCALE: f64 = 0.55;

/// Camera and canvas settings
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub width: u32,
    pub height: u32,
    /// Degrees above the ground plane
    pub elevation_deg: f64,
    /// Degrees counter-clockwise from +x, seen from above
    pub azimuth_deg: f64,
    pub background: Rgb8,
    pub grid_color: Rgb8,
    /// Floor grid cells per axis, 0 disables the grid
    pub grid_divisions: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
            background: Rgb8([255, 255, 255]),
            grid_color: Rgb8([221, 221, 221]),
            grid_divisions: 8,
        }
    }
}

/// Writes each presented frame to `path`
pub struct PngBackend {
    path: PathBuf,
    options: ViewOptions,
    bounds: Option<AxisBounds>,
    image: RgbImage,
    right: Vector3<f64>,
    up: Vector3<f64>,
}

impl PngBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, ViewOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: ViewOptions) -> Self {
        let azimuth = options.azimuth_deg.to_radians();
        let elevation = options.elevation_deg.to_radians();
        // Screen axes of a camera looking at the origin from (azimuth, elevation)
        let right = Vector3::new(-azimuth.sin(), azimuth.cos(), 0.0);
        let up = Vector3::new(
            -elevation.sin() * azimuth.cos(),
            -elevation.sin() * azimuth.sin(),
            elevation.cos(),
        );
        let image =
            RgbImage::from_pixel(options.width, options.height, options.background.to_pixel());

        Self {
            path: path.into(),
            options,
            bounds: None,
            image,
            right,
            up,
        }
    }

    /// The canvas as drawn so far
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    fn project(&self, bounds: &AxisBounds, p: &Point3<f64>) -> Vector2<f64> {
        let normalize = |v: f64, [min, max]: [f64; 2]| (v - min) / (max - min) - 0.5;
        let n = Vector3::new(
            normalize(p.x, bounds.x),
            normalize(p.y, bounds.y),
            normalize(p.z, bounds.z),
        );

        let width = self.options.width as f64;
        let height = self.options.height as f64;
        let scale = VIEW_SCALE * width.min(height);
        Vector2::new(
            width / 2.0 + n.dot(&self.right) * scale,
            height / 2.0 - n.dot(&self.up) * scale,
        )
    }

    fn stroke(&mut self, bounds: &AxisBounds, points: &[Point3<f64>], color: Rgb8) -> bool {
        let projected: Vec<Vector2<f64>> = points.iter().map(|p| self.project(bounds, p)).collect();
        let mut visible = true;
        for pair in projected.windows(2) {
            visible &= draw_segment(&mut self.image, pair[0], pair[1], color);
        }
        visible
    }

    fn draw_floor(&mut self, bounds: &AxisBounds) -> Result<()> {
        let grid = self.options.grid_color;
        let [x0, x1] = bounds.x;
        let [y0, y1] = bounds.y;
        let z = bounds.z[0];

        let divisions = self.options.grid_divisions;
        for i in 1..divisions {
            let t = i as f64 / divisions as f64;
            let x = x0 + (x1 - x0) * t;
            let y = y0 + (y1 - y0) * t;
            self.stroke(bounds, &[Point3::new(x, y0, z), Point3::new(x, y1, z)], grid);
            self.stroke(bounds, &[Point3::new(x0, y, z), Point3::new(x1, y, z)], grid);
        }

        // Outline of the whole axes volume
        let [sx, sy, sz] = bounds.spans();
        let corners = compute_corners((x0 + x1) / 2.0, (y0 + y1) / 2.0, sy, sx, sz, 0.0)?;
        let frame = build_edges(&corners);
        let lift = Vector3::new(0.0, 0.0, z);
        for stroke in frame.outline() {
            let lifted: Vec<Point3<f64>> = stroke.iter().map(|&p| p + lift).collect();
            self.stroke(bounds, &lifted, grid);
        }
        Ok(())
    }
}

impl DisplayBackend for PngBackend {
    fn set_axis_bounds(&mut self, bounds: &AxisBounds) -> Result<()> {
        bounds.validate().map_err(VisualizerError::Backend)?;
        self.image = RgbImage::from_pixel(
            self.options.width,
            self.options.height,
            self.options.background.to_pixel(),
        );
        self.bounds = Some(*bounds);
        self.draw_floor(bounds)
    }

    fn draw_polyline(&mut self, points: &[Point3<f64>], color: &str) -> Result<()> {
        ensure_polyline(points)?;
        let bounds = self
            .bounds
            .ok_or_else(|| VisualizerError::Backend("axis bounds not set".into()))?;
        let rgb = Rgb8::parse(color)?;
        if !self.stroke(&bounds, points, rgb) {
            warn!("Polyline in {color} extends past the image edge");
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.image.save(&self.path).map_err(|e| {
            VisualizerError::Backend(format!("failed to save {}: {e}", self.path.display()))
        })?;
        info!("Frame saved to {}", self.path.display());
        Ok(())
    }
}

/// Walk the segment pixel by pixel after clipping it to the canvas.
/// Returns false when part of the segment lies outside the canvas.
fn draw_segment(image: &mut RgbImage, a: Vector2<f64>, b: Vector2<f64>, color: Rgb8) -> bool {
    let max_x = image.width() as f64 - 1.0;
    let max_y = image.height() as f64 - 1.0;
    let Some((t0, t1)) = clip_segment(a, b, max_x, max_y) else {
        return false;
    };

    let start = a + (b - a) * t0;
    let end = a + (b - a) * t1;
    let delta = end - start;
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
    let pixel = color.to_pixel();
    for i in 0..=steps {
        let p = start + delta * (i as f64 / steps as f64);
        let (x, y) = (p.x.round(), p.y.round());
        if x >= 0.0 && y >= 0.0 && x <= max_x && y <= max_y {
            image.put_pixel(x as u32, y as u32, pixel);
        }
    }

    t0 == 0.0 && t1 == 1.0
}

/// Liang-Barsky clip of `a + t (b - a)` against [0, max_x] x [0, max_y]
fn clip_segment(a: Vector2<f64>, b: Vector2<f64>, max_x: f64, max_y: f64) -> Option<(f64, f64)> {
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-d.x, a.x),
        (d.x, max_x - a.x),
        (-d.y, a.y),
        (d.y, max_y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1))
}
