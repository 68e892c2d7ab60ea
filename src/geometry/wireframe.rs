// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Wireframe assembly: turns box corners into drawable polylines

use super::Vertex8;
use nalgebra::Point3;
use serde::Serialize;

/// Strokes needed to draw one box.
///
/// Every corner of a box has three edges, so no single pen path can trace all
/// 12 edges once; four strokes is the minimum. `main_path` carries 9 edges and
/// the three `struts` carry the remaining verticals.
#[derive(Debug, Clone, Serialize)]
pub struct Wireframe {
    /// base0 → base1 → base2 → base3 → base0 → top0 → top1 → top2 → top3 → top0
    pub main_path: Vec<Point3<f64>>,
    /// Vertical edges at corners 1, 2 and 3
    pub struts: [[Point3<f64>; 2]; 3],
    /// base0 → top1 and base1 → top0, an X on the front face
    pub cross_lines: [[Point3<f64>; 2]; 2],
}

impl Wireframe {
    /// All strokes drawn in the box color, main path first
    pub fn outline(&self) -> impl Iterator<Item = &[Point3<f64>]> {
        std::iter::once(self.main_path.as_slice())
            .chain(self.struts.iter().map(|s| s.as_slice()))
    }

    /// Every segment of the outline, as consecutive point pairs
    pub fn outline_segments(&self) -> Vec<[Point3<f64>; 2]> {
        self.outline()
            .flat_map(|stroke| stroke.windows(2).map(|w| [w[0], w[1]]))
            .collect()
    }
}

/// Build the strokes for a box from its corners
pub fn build_edges(corners: &Vertex8) -> Wireframe {
    let base = |i: usize| corners.base(i);
    let top = |i: usize| corners.top(i);

    let main_path = vec![
        base(0),
        base(1),
        base(2),
        base(3),
        base(0),
        top(0),
        top(1),
        top(2),
        top(3),
        top(0),
    ];

    Wireframe {
        main_path,
        struts: [[base(1), top(1)], [base(2), top(2)], [base(3), top(3)]],
        cross_lines: [[base(0), top(1)], [base(1), top(0)]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_corners;

    /// Corner index of a point, 0..8 in Vertex8 order
    fn corner_index(corners: &Vertex8, p: &Point3<f64>) -> usize {
        corners
            .as_slice()
            .iter()
            .position(|c| c == p)
            .expect("stroke point is not a box corner")
    }

    fn box_edges() -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..4 {
            let j = (i + 1) % 4;
            edges.push((i, j));
            edges.push((i + 4, j + 4));
            edges.push((i, i + 4));
        }
        edges
    }

    fn normalized(a: usize, b: usize) -> (usize, usize) {
        (a.min(b), a.max(b))
    }

    #[test]
    fn test_every_edge_drawn_once() {
        let corners = compute_corners(1.0, 2.0, 4.5, 1.8, 1.5, 0.4).unwrap();
        let wireframe = build_edges(&corners);

        let mut drawn: Vec<(usize, usize)> = wireframe
            .outline_segments()
            .iter()
            .map(|[a, b]| normalized(corner_index(&corners, a), corner_index(&corners, b)))
            .collect();
        drawn.sort_unstable();

        let mut expected: Vec<(usize, usize)> =
            box_edges().into_iter().map(|(a, b)| normalized(a, b)).collect();
        expected.sort_unstable();

        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_stroke_count() {
        let corners = compute_corners(0.0, 0.0, 4.0, 4.0, 2.0, 0.0).unwrap();
        let wireframe = build_edges(&corners);
        assert_eq!(wireframe.main_path.len(), 10);
        assert_eq!(wireframe.outline().count(), 4);
        assert_eq!(wireframe.outline_segments().len(), 12);
    }

    #[test]
    fn test_cross_lines_on_front_face() {
        let corners = compute_corners(0.0, 0.0, 4.0, 4.0, 2.0, 0.0).unwrap();
        let wireframe = build_edges(&corners);

        let [first, second] = wireframe.cross_lines;
        assert_eq!(first, [Point3::new(2.0, 2.0, 0.0), Point3::new(-2.0, 2.0, 2.0)]);
        assert_eq!(second, [Point3::new(-2.0, 2.0, 0.0), Point3::new(2.0, 2.0, 2.0)]);

        // Unrotated, the front face is the plane y = +length/2
        for p in first.iter().chain(second.iter()) {
            assert_eq!(p.y, 2.0);
        }
    }
}
