//! Draw surface that records every call instead of rasterising it.
//!
//! Drawer output depends on the clock and on jitter, so tests assert on the
//! structure of the recorded instruction stream rather than on pixels.

use glam::Vec2;

use crate::{Color, DrawSurface, Stroke};

/// Single recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// [`DrawSurface::fill_rect`].
    FillRect {
        /// Top-left corner.
        origin: Vec2,
        /// Width and height.
        size: Vec2,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::fill_circle`].
    FillCircle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::fill_ellipse`].
    FillEllipse {
        /// Ellipse center.
        center: Vec2,
        /// Horizontal and vertical radii.
        radii: Vec2,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::fill_polygon`].
    FillPolygon {
        /// Polygon vertices.
        points: Vec<Vec2>,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::stroke_polyline`].
    StrokePolyline {
        /// Polyline vertices.
        points: Vec<Vec2>,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`DrawSurface::stroke_circle`].
    StrokeCircle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`DrawSurface::stroke_arc`].
    StrokeArc {
        /// Arc center.
        center: Vec2,
        /// Arc radius.
        radius: f32,
        /// Start angle in radians.
        start_angle: f32,
        /// End angle in radians.
        end_angle: f32,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`DrawSurface::set_line_dash`].
    SetLineDash {
        /// Dash pattern that became active.
        pattern: Vec<f32>,
    },
}

impl DrawOp {
    /// Whether the call puts pixels on the surface, as opposed to changing style state.
    #[must_use]
    pub fn is_paint(&self) -> bool {
        !matches!(self, DrawOp::SetLineDash { .. })
    }

    /// Fill or stroke color of a paint call.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            DrawOp::FillRect { color, .. }
            | DrawOp::FillCircle { color, .. }
            | DrawOp::FillEllipse { color, .. }
            | DrawOp::FillPolygon { color, .. } => Some(*color),
            DrawOp::StrokePolyline { stroke, .. }
            | DrawOp::StrokeCircle { stroke, .. }
            | DrawOp::StrokeArc { stroke, .. } => Some(stroke.color),
            DrawOp::SetLineDash { .. } => None,
        }
    }

    /// Every geometric number carried by the call, for finiteness checks.
    #[must_use]
    pub fn scalars(&self) -> Vec<f32> {
        match self {
            DrawOp::FillRect { origin, size, .. } => vec![origin.x, origin.y, size.x, size.y],
            DrawOp::FillCircle { center, radius, .. } => vec![center.x, center.y, *radius],
            DrawOp::FillEllipse { center, radii, .. } => {
                vec![center.x, center.y, radii.x, radii.y]
            }
            DrawOp::FillPolygon { points, .. } | DrawOp::StrokePolyline { points, .. } => points
                .iter()
                .flat_map(|point| [point.x, point.y])
                .collect(),
            DrawOp::StrokeCircle { center, radius, .. } => vec![center.x, center.y, *radius],
            DrawOp::StrokeArc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => vec![center.x, center.y, *radius, *start_angle, *end_angle],
            DrawOp::SetLineDash { pattern } => pattern.clone(),
        }
    }
}

/// Surface capturing the ordered sequence of draw calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    line_dash: Vec<f32>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in issue order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of calls that put pixels on the surface.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_paint()).count()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }

    /// Stroked polylines in issue order.
    pub fn polylines(&self) -> impl Iterator<Item = (&[Vec2], Stroke)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokePolyline { points, stroke } => Some((points.as_slice(), *stroke)),
            _ => None,
        })
    }

    /// First stroked polyline, the primary pass of an attack effect.
    #[must_use]
    pub fn primary_polyline(&self) -> Option<(&[Vec2], Stroke)> {
        self.polylines().next()
    }

    /// Whether every recorded number is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.ops
            .iter()
            .all(|op| op.scalars().iter().all(|value| value.is_finite()))
    }

    /// Discards the recording while keeping the current dash state.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ops.push(DrawOp::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.ops.push(DrawOp::FillEllipse {
            center,
            radii,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.ops.push(DrawOp::StrokePolyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    ) {
        self.ops.push(DrawOp::StrokeArc {
            center,
            radius,
            start_angle,
            end_angle,
            stroke,
        });
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.line_dash = pattern.to_vec();
        self.ops.push(DrawOp::SetLineDash {
            pattern: pattern.to_vec(),
        });
    }

    fn line_dash(&self) -> &[f32] {
        &self.line_dash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_issue_order() {
        let mut surface = RecordingSurface::new();
        let stroke = Stroke::new(Color::WHITE, 2.0);
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, Color::BLACK);
        surface.stroke_polyline(&[Vec2::ZERO, Vec2::X], stroke);
        surface.set_line_dash(&[2.0, 2.0]);

        assert_eq!(surface.ops().len(), 3);
        assert_eq!(surface.paint_count(), 2);
        assert_eq!(surface.line_dash(), &[2.0, 2.0]);
        let (points, recorded) = surface.primary_polyline().expect("polyline recorded");
        assert_eq!(points, &[Vec2::ZERO, Vec2::X]);
        assert_eq!(recorded, stroke);
    }

    #[test]
    fn finiteness_check_catches_nan_coordinates() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(Vec2::new(1.0, 2.0), 3.0, Color::WHITE);
        assert!(surface.is_finite());

        surface.fill_circle(Vec2::new(f32::NAN, 2.0), 3.0, Color::WHITE);
        assert!(!surface.is_finite());
    }

    #[test]
    fn clear_keeps_dash_state() {
        let mut surface = RecordingSurface::new();
        surface.set_line_dash(&[1.0]);
        surface.clear();

        assert!(surface.ops().is_empty());
        assert_eq!(surface.line_dash(), &[1.0]);
    }
}
