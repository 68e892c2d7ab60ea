// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Oriented boxes resting on the ground plane and their corner geometry

use crate::error::{Result, VisualizerError};
use nalgebra::{Point2, Point3, Rotation2};
use serde::Serialize;
use tracing::debug;

/// Category reserved for the reference (ego) box
pub const MAIN_CATEGORY: &str = "Main";

/// Dimensions of the reference box drawn at the origin of every frame
pub const MAIN_LENGTH: f64 = 4.0;
pub const MAIN_WIDTH: f64 = 4.0;
pub const MAIN_HEIGHT: f64 = 2.0;

/// Rectangular prism standing on z = 0, rotated about its center in the x-y plane.
///
/// `length` runs along the local forward axis (+y before rotation) and `width`
/// along the local lateral axis (+x). `angle` is in radians, counter-clockwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientedBox {
    pub center: Point2<f64>,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub category: String,
}

impl OrientedBox {
    pub fn new(
        center_x: f64,
        center_y: f64,
        length: f64,
        width: f64,
        height: f64,
        angle: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            center: Point2::new(center_x, center_y),
            length,
            width,
            height,
            angle,
            category: category.into(),
        }
    }

    /// The reference box: centered at the origin, unrotated
    pub fn main() -> Self {
        Self::new(0.0, 0.0, MAIN_LENGTH, MAIN_WIDTH, MAIN_HEIGHT, 0.0, MAIN_CATEGORY)
    }

    pub fn is_main(&self) -> bool {
        self.category == MAIN_CATEGORY
    }

    /// Check that length, width and height are all finite and strictly positive
    pub fn validate_dimensions(&self) -> Result<()> {
        check_dimension("length", self.length)?;
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }

    pub fn corners(&self) -> Result<Vertex8> {
        compute_corners(
            self.center.x,
            self.center.y,
            self.length,
            self.width,
            self.height,
            self.angle,
        )
    }
}

/// The 8 corners of a box: 4 base corners at z = 0 followed by the 4 top
/// corners in the same x-y order.
///
/// Corner order before rotation is (+w/2, +l/2), (-w/2, +l/2), (-w/2, -l/2),
/// (+w/2, -l/2). Edge assembly relies on this order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex8 {
    points: [Point3<f64>; 8],
}

impl Vertex8 {
    fn from_base(base: [Point2<f64>; 4], height: f64) -> Self {
        let points = std::array::from_fn(|i| {
            let p = base[i % 4];
            let z = if i < 4 { 0.0 } else { height };
            Point3::new(p.x, p.y, z)
        });
        Self { points }
    }

    pub fn base(&self, i: usize) -> Point3<f64> {
        self.points[i]
    }

    pub fn top(&self, i: usize) -> Point3<f64> {
        self.points[i + 4]
    }

    pub fn base_corners(&self) -> &[Point3<f64>] {
        &self.points[..4]
    }

    pub fn top_corners(&self) -> &[Point3<f64>] {
        &self.points[4..]
    }

    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }
}

/// Intermediate results of the corner computation, kept for inspection
#[derive(Debug, Clone, Serialize)]
pub struct CornerStages {
    /// Base corners in the box frame
    pub local: [Point2<f64>; 4],
    /// Base corners after rotation about the box center
    pub rotated: [Point2<f64>; 4],
    /// Final world-space corners
    pub translated: Vertex8,
}

/// Compute the world-space corners of a box
pub fn compute_corners(
    center_x: f64,
    center_y: f64,
    length: f64,
    width: f64,
    height: f64,
    angle: f64,
) -> Result<Vertex8> {
    let stages = corner_stages(center_x, center_y, length, width, height, angle)?;
    debug!(
        local = ?stages.local,
        rotated = ?stages.rotated,
        "corners for box at ({center_x}, {center_y}), angle {angle}"
    );
    Ok(stages.translated)
}

/// Same as [`compute_corners`] but returns every stage of the transform
pub fn corner_stages(
    center_x: f64,
    center_y: f64,
    length: f64,
    width: f64,
    height: f64,
    angle: f64,
) -> Result<CornerStages> {
    check_dimension("length", length)?;
    check_dimension("width", width)?;
    check_dimension("height", height)?;

    let half_length = length / 2.0;
    let half_width = width / 2.0;
    let local = [
        Point2::new(half_width, half_length),
        Point2::new(-half_width, half_length),
        Point2::new(-half_width, -half_length),
        Point2::new(half_width, -half_length),
    ];

    // [[cos, -sin], [sin, cos]]
    let rotation = Rotation2::new(angle);
    let rotated = local.map(|p| rotation * p);
    let base = rotated.map(|p| Point2::new(p.x + center_x, p.y + center_y));

    Ok(CornerStages {
        local,
        rotated,
        translated: Vertex8::from_base(base, height),
    })
}

fn check_dimension(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VisualizerError::InvalidDimension { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_unrotated_corners() {
        let corners = compute_corners(0.0, 0.0, 4.0, 4.0, 2.0, 0.0).unwrap();

        assert_eq!(corners.base(0), Point3::new(2.0, 2.0, 0.0));
        assert_eq!(corners.base(1), Point3::new(-2.0, 2.0, 0.0));
        assert_eq!(corners.base(2), Point3::new(-2.0, -2.0, 0.0));
        assert_eq!(corners.base(3), Point3::new(2.0, -2.0, 0.0));
        assert_eq!(corners.top(0), Point3::new(2.0, 2.0, 2.0));
        assert_eq!(corners.top(2), Point3::new(-2.0, -2.0, 2.0));
    }

    #[test]
    fn test_length_runs_along_y() {
        // Width 2 on x, length 6 on y
        let corners = compute_corners(1.0, -1.0, 6.0, 2.0, 1.0, 0.0).unwrap();
        assert_eq!(corners.base(0), Point3::new(2.0, 2.0, 0.0));
        assert_eq!(corners.base(2), Point3::new(0.0, -4.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        let corners = compute_corners(0.0, 0.0, 4.0, 2.0, 1.0, FRAC_PI_2).unwrap();
        // (+1, +2) rotated by +90 degrees lands on (-2, +1)
        assert_relative_eq!(corners.base(0).x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(corners.base(0).y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_turn_matches_original() {
        let a = compute_corners(3.0, 4.0, 5.0, 2.0, 1.5, 0.3).unwrap();
        let b = compute_corners(3.0, 4.0, 5.0, 2.0, 1.5, 0.3 + 2.0 * PI).unwrap();
        for (p, q) in a.as_slice().iter().zip(b.as_slice()) {
            assert_relative_eq!(p, q, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_top_matches_base() {
        let corners = compute_corners(-3.0, 8.0, 4.5, 1.8, 1.6, -0.7).unwrap();
        for i in 0..4 {
            assert_eq!(corners.base(i).x, corners.top(i).x);
            assert_eq!(corners.base(i).y, corners.top(i).y);
            assert_eq!(corners.top(i).z - corners.base(i).z, 1.6);
        }
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (l, w, h, field) in [
            (0.0, 1.0, 1.0, "length"),
            (1.0, -2.0, 1.0, "width"),
            (1.0, 1.0, f64::NAN, "height"),
            (f64::INFINITY, 1.0, 1.0, "length"),
            (1.0, f64::NEG_INFINITY, 1.0, "width"),
        ] {
            match compute_corners(0.0, 0.0, l, w, h, 0.0) {
                Err(VisualizerError::InvalidDimension { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected InvalidDimension for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_infinite_box_rejected_before_rendering() {
        let huge = OrientedBox::new(0.0, 0.0, f64::INFINITY, 2.0, 1.0, 0.0, "Car");
        assert!(matches!(
            huge.validate_dimensions(),
            Err(VisualizerError::InvalidDimension { field: "length", .. })
        ));
        assert!(huge.corners().is_err());
    }

    #[test]
    fn test_stages_are_consistent() {
        let stages = corner_stages(5.0, 7.0, 4.0, 4.0, 2.0, -PI / 4.0).unwrap();
        assert_eq!(stages.local[0], Point2::new(2.0, 2.0));
        for i in 0..4 {
            assert_relative_eq!(stages.rotated[i].coords.norm(), 8.0_f64.sqrt(), epsilon = 1e-12);
            assert_relative_eq!(stages.translated.base(i).x, stages.rotated[i].x + 5.0);
            assert_relative_eq!(stages.translated.base(i).y, stages.rotated[i].y + 7.0);
        }
    }

    #[test]
    fn test_main_box() {
        let main = OrientedBox::main();
        assert!(main.is_main());
        assert!(main.validate_dimensions().is_ok());
        assert_eq!(main.corners().unwrap().base(0), Point3::new(2.0, 2.0, 0.0));
    }
}
