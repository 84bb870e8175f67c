#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts and procedural drawers for Proxy Defense.
//!
//! Drawers are free functions that paint one sprite or effect for one frame.
//! They borrow a [`DrawSurface`] owned by the caller and read time and jitter
//! exclusively from the [`Frame`] passed alongside it, so a game loop controls
//! simulation speed and tests can pin both the clock and the random source.
//! Drawers never fail: malformed numbers degrade into odd pixels, never into a
//! panic that would take the host loop down.

pub mod attacks;
pub mod dispatch;
pub mod frame;
pub mod geometry;
pub mod recording;
pub mod showcase;
pub mod sprites;

use glam::Vec2;

pub use attacks::{
    draw_ddos_attack, draw_explosion, draw_hacker_attack, draw_lightning, draw_malware_attack,
    draw_phoenix_attack, draw_portal_miner_attack, draw_spider_attack, draw_worm_attack,
};
pub use dispatch::{draw_enemy_attack, draw_enemy_attack_tag};
pub use frame::{Frame, RandomSource, SeededRandom, SequenceRandom};
pub use sprites::{
    draw_antivirus_tower, draw_chain_tower, draw_ddos_enemy, draw_enemy, draw_firewall_tower,
    draw_hacker_enemy, draw_malware_enemy, draw_phoenix_enemy, draw_portal_miner_enemy,
    draw_proxy_tower, draw_replicator_enemy, draw_shielded_enemy, draw_slowdown_tower,
    draw_spider_enemy, draw_tower, draw_voltage_enemy, draw_worm_enemy,
};

/// RGBA color used when painting sprites and effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity. Drawers do not clamp it.
    pub alpha: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns the same color with its alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }

    /// Returns the same color with its alpha channel multiplied by `factor`.
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.alpha * factor)
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Color and width applied to a single stroke call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Color of the stroked line.
    pub color: Color,
    /// Line width in surface pixels.
    pub width: f32,
}

impl Stroke {
    /// Creates a new stroke descriptor.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Raster drawing context owned by the game loop and borrowed by drawers.
///
/// Fill and stroke colors travel with each call. The dash pattern is the only
/// retained style state and drawers that change it must restore it before
/// returning; [`with_line_dash`] does that bookkeeping.
pub trait DrawSurface {
    /// Fills an axis-aligned rectangle anchored at its top-left corner.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Fills an axis-aligned ellipse.
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    /// Fills a closed convex polygon described by its vertices.
    ///
    /// Backends may fan triangles from the first vertex, so callers split
    /// concave shapes into convex pieces.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Strokes an open polyline through the provided vertices.
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);

    /// Strokes the outline of a circle.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke);

    /// Strokes a circular arc running clockwise from `start_angle` to `end_angle`, in radians.
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    );

    /// Replaces the dash pattern applied to subsequent strokes. An empty pattern is solid.
    fn set_line_dash(&mut self, pattern: &[f32]);

    /// Dash pattern currently applied to strokes.
    fn line_dash(&self) -> &[f32];
}

/// Runs `paint` with the provided dash pattern and restores a solid pattern afterwards.
pub fn with_line_dash<R>(
    surface: &mut dyn DrawSurface,
    pattern: &[f32],
    paint: impl FnOnce(&mut dyn DrawSurface) -> R,
) -> R {
    surface.set_line_dash(pattern);
    let result = paint(surface);
    surface.set_line_dash(&[]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, RecordingSurface};

    #[test]
    fn lighten_moves_channels_towards_white() {
        let color = Color::new(0.0, 0.5, 1.0, 0.4).lighten(0.5);

        assert_eq!(color, Color::new(0.5, 0.75, 1.0, 0.4));
    }

    #[test]
    fn lighten_clamps_amount() {
        let color = Color::from_rgb_u8(0, 0, 0).lighten(4.0);

        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let color = Color::new(0.2, 0.3, 0.4, 0.8).fade(0.5);

        assert_eq!(color, Color::new(0.2, 0.3, 0.4, 0.4));
    }

    #[test]
    fn with_line_dash_restores_solid_pattern() {
        let mut surface = RecordingSurface::new();
        let observed = with_line_dash(&mut surface, &[4.0, 2.0], |surface| {
            surface.stroke_circle(Vec2::ZERO, 5.0, Stroke::new(Color::WHITE, 1.0));
            surface.line_dash().to_vec()
        });

        assert_eq!(observed, vec![4.0, 2.0]);
        assert!(surface.line_dash().is_empty());
        assert!(matches!(
            surface.ops().last(),
            Some(DrawOp::SetLineDash { pattern }) if pattern.is_empty()
        ));
    }
}
