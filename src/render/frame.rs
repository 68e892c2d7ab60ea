// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Frame renderer: the Main box plus every surrounding object, in one pass

use super::{DisplayBackend, DrawCommand};
use crate::config::VisualizerConfig;
use crate::error::{Result, VisualizerError};
use crate::geometry::{build_edges, OrientedBox};
use tracing::{debug, info};

/// Color of the front-face cross-lines, independent of the category
pub const MARKER_COLOR: &str = "black";

/// What a successful `render_frame` call sent to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    /// Boxes drawn, the Main box included
    pub boxes: usize,
    /// Commands issued, bounds and present included
    pub commands: usize,
}

/// Draws frames using a borrowed configuration.
///
/// A frame is all-or-nothing: every object is validated and every color
/// resolved before the first command reaches the backend.
pub struct FrameRenderer<'a> {
    config: &'a VisualizerConfig,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(config: &'a VisualizerConfig) -> Self {
        Self { config }
    }

    /// Validate the objects and build the full command list for one frame
    pub fn plan_frame(&self, objects: &[OrientedBox]) -> Result<Vec<DrawCommand>> {
        if objects.iter().any(OrientedBox::is_main) {
            return Err(VisualizerError::ReservedCategory);
        }

        // Bounds, 6 polylines per box, present
        let mut commands = Vec::with_capacity(2 + 6 * (objects.len() + 1));
        commands.push(DrawCommand::SetAxisBounds(self.config.axis_bounds));

        let main = OrientedBox::main();
        for object in std::iter::once(&main).chain(objects) {
            self.plan_box(object, &mut commands)?;
        }

        commands.push(DrawCommand::Present);
        Ok(commands)
    }

    /// Render one frame. Nothing is sent to the backend if any object is rejected.
    pub fn render_frame(
        &self,
        objects: &[OrientedBox],
        backend: &mut dyn DisplayBackend,
    ) -> Result<FrameSummary> {
        let commands = self.plan_frame(objects)?;
        for command in &commands {
            backend.execute(command)?;
        }

        let summary = FrameSummary {
            boxes: objects.len() + 1,
            commands: commands.len(),
        };
        info!(
            "Rendered frame with {} boxes ({} commands)",
            summary.boxes, summary.commands
        );
        Ok(summary)
    }

    fn plan_box(&self, object: &OrientedBox, commands: &mut Vec<DrawCommand>) -> Result<()> {
        let color = self
            .config
            .colors
            .get(&object.category)
            .ok_or_else(|| VisualizerError::UnknownCategory(object.category.clone()))?;

        let corners = object.corners()?;
        let wireframe = build_edges(&corners);
        debug!(
            category = %object.category,
            center = ?object.center,
            angle = object.angle,
            "planned box"
        );

        for stroke in wireframe.outline() {
            commands.push(DrawCommand::polyline(stroke, color));
        }
        for line in wireframe.cross_lines {
            commands.push(DrawCommand::polyline(line.to_vec(), MARKER_COLOR));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AxisBounds, CategoryColorTable};
    use crate::render::RecordingBackend;

    fn config() -> VisualizerConfig {
        VisualizerConfig::new(
            AxisBounds::default(),
            CategoryColorTable::new().with("Main", "blue").with("Car", "red"),
        )
    }

    #[test]
    fn test_empty_frame_draws_main_box() {
        let config = config();
        let mut backend = RecordingBackend::new();
        let summary = FrameRenderer::new(&config)
            .render_frame(&[], &mut backend)
            .unwrap();

        assert_eq!(summary, FrameSummary { boxes: 1, commands: 8 });
        assert_eq!(
            backend.commands[0],
            DrawCommand::SetAxisBounds(AxisBounds::default())
        );
        assert_eq!(backend.polylines_with_color("blue").count(), 4);
        assert_eq!(backend.polylines_with_color(MARKER_COLOR).count(), 2);
        assert!(backend.presented());
    }

    #[test]
    fn test_reserved_category_issues_nothing() {
        let config = config();
        let mut backend = RecordingBackend::new();
        let objects = [
            OrientedBox::new(5.0, 7.0, 4.0, 4.0, 2.0, 0.0, "Car"),
            OrientedBox::new(1.0, 1.0, 4.0, 4.0, 2.0, 0.0, "Main"),
        ];

        let err = FrameRenderer::new(&config)
            .render_frame(&objects, &mut backend)
            .unwrap_err();
        assert!(matches!(err, VisualizerError::ReservedCategory));
        assert!(backend.commands.is_empty());
    }

    #[test]
    fn test_unknown_category_issues_nothing() {
        let config = config();
        let mut backend = RecordingBackend::new();
        let objects = [
            OrientedBox::new(5.0, 7.0, 4.0, 4.0, 2.0, 0.0, "Car"),
            OrientedBox::new(-5.0, 7.0, 4.0, 4.0, 2.0, 0.0, "Bicycle"),
        ];

        let err = FrameRenderer::new(&config)
            .render_frame(&objects, &mut backend)
            .unwrap_err();
        match err {
            VisualizerError::UnknownCategory(category) => assert_eq!(category, "Bicycle"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
        assert!(backend.commands.is_empty());
    }

    #[test]
    fn test_invalid_dimension_issues_nothing() {
        let config = config();
        let mut backend = RecordingBackend::new();
        let objects = [OrientedBox::new(0.0, 0.0, 4.0, 0.0, 2.0, 0.0, "Car")];

        let err = FrameRenderer::new(&config)
            .render_frame(&objects, &mut backend)
            .unwrap_err();
        assert!(matches!(
            err,
            VisualizerError::InvalidDimension { field: "width", .. }
        ));
        assert!(backend.commands.is_empty());
    }

    #[test]
    fn test_objects_drawn_in_order() {
        let config = VisualizerConfig::new(
            AxisBounds::default(),
            CategoryColorTable::new()
                .with("Main", "blue")
                .with("Car", "red")
                .with("Truck", "orange"),
        );
        let objects = [
            OrientedBox::new(5.0, 0.0, 4.0, 2.0, 1.5, 0.0, "Truck"),
            OrientedBox::new(-5.0, 0.0, 4.0, 2.0, 1.5, 0.0, "Car"),
        ];
        let commands = FrameRenderer::new(&config).plan_frame(&objects).unwrap();
        let colors: Vec<&str> = commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Polyline { color, .. } if color != MARKER_COLOR => {
                    Some(color.as_str())
                }
                _ => None,
            })
            .collect();

        assert_eq!(colors.len(), 12);
        assert!(colors[..4].iter().all(|c| *c == "blue"));
        assert!(colors[4..8].iter().all(|c| *c == "orange"));
        assert!(colors[8..].iter().all(|c| *c == "red"));
        assert_eq!(commands.last(), Some(&DrawCommand::Present));
    }
}
