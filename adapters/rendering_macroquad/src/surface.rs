use std::f32::consts::TAU;

use glam::Vec2;
use macroquad::{math::Vec2 as MacroquadVec2, shapes};
use proxy_defense_rendering::{
    geometry::{arc_points, circle_points, dash_segments},
    Color, DrawSurface, Stroke,
};

use crate::to_macroquad_color;

/// Vertices used for a full circle outline or ellipse fan.
const CIRCLE_SEGMENTS: usize = 32;

/// [`DrawSurface`] that rasterises straight into the active macroquad frame.
///
/// Strokes are tessellated into line segments so the dash pattern applies to
/// every stroke kind, circles and arcs included.
#[derive(Clone, Debug, Default)]
pub struct MacroquadSurface {
    line_dash: Vec<f32>,
}

impl MacroquadSurface {
    /// Creates a surface with a solid dash pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn stroke_path(&self, points: &[Vec2], stroke: Stroke) {
        let color = to_macroquad_color(stroke.color);
        for (start, end) in dash_segments(points, &self.line_dash) {
            shapes::draw_line(start.x, start.y, end.x, end.y, stroke.width, color);
        }
    }

    fn fill_fan(center: Vec2, rim: &[Vec2], color: Color) {
        let color = to_macroquad_color(color);
        for pair in rim.windows(2) {
            shapes::draw_triangle(
                to_macroquad_vec2(center),
                to_macroquad_vec2(pair[0]),
                to_macroquad_vec2(pair[1]),
                color,
            );
        }
    }
}

impl DrawSurface for MacroquadSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        shapes::draw_rectangle(
            origin.x,
            origin.y,
            size.x,
            size.y,
            to_macroquad_color(color),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        shapes::draw_circle(center.x, center.y, radius, to_macroquad_color(color));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        Self::fill_fan(center, &ellipse_points(center, radii), color);
    }

    // Fanning from the first vertex covers convex polygons exactly.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        Self::fill_fan(first, rest, color);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.stroke_path(points, stroke);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.stroke_path(&circle_points(center, radius, CIRCLE_SEGMENTS), stroke);
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    ) {
        let steps = arc_steps(end_angle - start_angle);
        self.stroke_path(
            &arc_points(center, radius, start_angle, end_angle, steps),
            stroke,
        );
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.line_dash = pattern.to_vec();
    }

    fn line_dash(&self) -> &[f32] {
        &self.line_dash
    }
}

/// Segments used for an arc sweeping `sweep` radians, proportional to a full circle.
fn arc_steps(sweep: f32) -> usize {
    let steps = (sweep.abs() / TAU * CIRCLE_SEGMENTS as f32).ceil();
    if steps.is_finite() {
        (steps as usize).clamp(1, CIRCLE_SEGMENTS)
    } else {
        1
    }
}

fn ellipse_points(center: Vec2, radii: Vec2) -> Vec<Vec2> {
    circle_points(Vec2::ZERO, 1.0, CIRCLE_SEGMENTS)
        .into_iter()
        .map(|unit| center + unit * radii)
        .collect()
}

fn to_macroquad_vec2(point: Vec2) -> MacroquadVec2 {
    MacroquadVec2::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn arc_steps_scale_with_sweep() {
        assert_eq!(arc_steps(TAU), CIRCLE_SEGMENTS);
        assert_eq!(arc_steps(PI), CIRCLE_SEGMENTS / 2);
        assert_eq!(arc_steps(-PI), CIRCLE_SEGMENTS / 2);
        assert_eq!(arc_steps(0.01), 1);
        assert_eq!(arc_steps(TAU * 4.0), CIRCLE_SEGMENTS);
    }

    #[test]
    fn arc_steps_survive_nan() {
        assert_eq!(arc_steps(f32::NAN), 1);
        assert_eq!(arc_steps(f32::INFINITY), 1);
    }

    #[test]
    fn ellipse_points_stretch_the_unit_circle() {
        let points = ellipse_points(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0));

        assert_eq!(points.len(), CIRCLE_SEGMENTS + 1);
        assert!((points[0] - Vec2::new(14.0, 20.0)).length() < 1e-4);
        let quarter = points[CIRCLE_SEGMENTS / 4];
        assert!((quarter - Vec2::new(10.0, 22.0)).length() < 1e-4);
    }

    #[test]
    fn dash_pattern_is_retained_until_replaced() {
        let mut surface = MacroquadSurface::new();
        surface.set_line_dash(&[4.0, 3.0]);
        assert_eq!(surface.line_dash(), &[4.0, 3.0]);

        surface.set_line_dash(&[]);
        assert!(surface.line_dash().is_empty());
    }
}
