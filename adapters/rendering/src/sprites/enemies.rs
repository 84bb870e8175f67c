use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use super::{paint_sprite, Shadow, SpriteContext, SpriteLayers, LARGE_ANCHOR_OFFSET};
use crate::{with_line_dash, Color, DrawSurface, Frame, Stroke};

const HOOD: Color = Color::from_rgb_u8(47, 47, 47);
const LAPTOP: Color = Color::from_rgb_u8(80, 80, 80);
const TERMINAL_GREEN: Color = Color::from_rgb_u8(0, 255, 65);

const DDOS_CORE: Color = Color::from_rgb_u8(200, 30, 30);
const DDOS_DRONE: Color = Color::from_rgb_u8(240, 80, 80);
const WARNING: Color = Color::from_rgb_u8(255, 215, 0);

const VIRUS: Color = Color::from_rgb_u8(128, 0, 128);
const VIRUS_SPIKE: Color = Color::from_rgb_u8(186, 85, 211);
const LIME: Color = Color::from_rgb_u8(50, 255, 50);

const SPIDER_ABDOMEN: Color = Color::from_rgb_u8(30, 30, 30);
const SPIDER_HEAD: Color = Color::from_rgb_u8(45, 45, 45);
const SPIDER_LEG: Color = Color::from_rgb_u8(20, 20, 20);
const SPIDER_RED: Color = Color::from_rgb_u8(220, 20, 60);

const ARMOR: Color = Color::from_rgb_u8(112, 128, 144);
const VISOR: Color = Color::from_rgb_u8(0, 255, 255);
const SHIELD_RING: Color = Color::new(0.5, 0.8, 1.0, 0.3);
const SHIELD_SEGMENT: Color = Color::new(0.2, 0.6, 1.0, 0.8);

const VOLTAGE_ORB: Color = Color::from_rgb_u8(255, 215, 0);
const VOLTAGE_SPARK: Color = Color::from_rgb_u8(255, 255, 150);

const CELL: Color = Color::from_rgb_u8(0, 200, 120);
const NUCLEUS: Color = Color::from_rgb_u8(0, 100, 60);

const PHOENIX_BODY: Color = Color::from_rgb_u8(255, 100, 0);
const PHOENIX_HEAD: Color = Color::from_rgb_u8(255, 140, 0);
const PHOENIX_WING: Color = Color::from_rgb_u8(255, 69, 0);
const EMBER: Color = Color::from_rgb_u8(255, 200, 50);

const WORM_BODY: Color = Color::from_rgb_u8(50, 205, 50);
const DATA_BIT: Color = Color::from_rgb_u8(0, 255, 255);

const MINER_SUIT: Color = Color::from_rgb_u8(75, 0, 130);
const MINER_HELMET: Color = Color::from_rgb_u8(100, 100, 110);
const DRILL: Color = Color::from_rgb_u8(169, 169, 169);
const PORTAL: Color = Color::from_rgb_u8(186, 85, 255);

/// Shield arcs drawn at most, whatever the shield values claim.
const MAX_SHIELD_SEGMENTS: usize = 64;
const PORTAL_DASH: [f32; 2] = [4.0, 3.0];

/// Paints a hacker enemy.
pub fn draw_hacker_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Hacker, surface, frame, position);
}

/// Paints a DDoS swarm enemy.
pub fn draw_ddos_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Ddos, surface, frame, position);
}

/// Paints a malware enemy.
pub fn draw_malware_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Malware, surface, frame, position);
}

/// Paints the large spider enemy with eight animated legs.
pub fn draw_spider_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Spider, surface, frame, position);
}

/// Paints a shielded enemy with one arc per remaining shield point.
pub fn draw_shielded_enemy(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
    shield: f32,
    max_shield: f32,
) {
    paint_sprite(&Shielded { shield, max_shield }, surface, frame, position);
}

/// Paints a voltage enemy.
pub fn draw_voltage_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Voltage, surface, frame, position);
}

/// Paints a replicator. Copies render translucent and without the core glyph.
pub fn draw_replicator_enemy(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
    is_original: bool,
) {
    paint_sprite(&Replicator { is_original }, surface, frame, position);
}

/// Paints a phoenix, with a rising ember ring while it revives.
pub fn draw_phoenix_enemy(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
    is_reviving: bool,
) {
    paint_sprite(&Phoenix { is_reviving }, surface, frame, position);
}

/// Paints a worm enemy.
pub fn draw_worm_enemy(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Worm, surface, frame, position);
}

/// Paints a portal miner. Leaves the surface dash pattern solid.
pub fn draw_portal_miner_enemy(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
) {
    paint_sprite(&PortalMiner, surface, frame, position);
}

struct Hacker;

impl SpriteLayers for Hacker {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.polygon(
            &[
                Vec2::new(-10.0, 12.0),
                Vec2::new(-8.0, -6.0),
                Vec2::new(0.0, -13.0),
                Vec2::new(8.0, -6.0),
                Vec2::new(10.0, 12.0),
            ],
            HOOD,
        );
        ctx.rect(-5.0, -6.0, 10.0, 8.0, Color::BLACK);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-8.0, 6.0, 16.0, 5.0, LAPTOP);
        ctx.rect(-7.0, 3.0, 14.0, 3.0, TERMINAL_GREEN.fade(0.25));
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let glow = TERMINAL_GREEN.with_alpha(0.6 + 0.4 * ctx.wave(0.015));
        ctx.rect(-4.0, -3.0, 2.0, 2.0, glow);
        ctx.rect(2.0, -3.0, 2.0, 2.0, glow);

        let cycle = ctx.phase(0.002) / TAU;
        for bit in 0..3 {
            let rise = (cycle + bit as f32 / 3.0).fract();
            ctx.rect(
                -9.0 + bit as f32 * 8.0,
                -12.0 - rise * 8.0,
                2.0,
                3.0,
                TERMINAL_GREEN.with_alpha(1.0 - rise),
            );
        }
    }
}

struct Ddos;

impl SpriteLayers for Ddos {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, 0.0, 6.0, DDOS_CORE);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-4.0, -2.0, 2.0, 2.0, WARNING);
        ctx.rect(2.0, -2.0, 2.0, 2.0, WARNING);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for drone in 0..5 {
            let offset = drone as f32 * TAU / 5.0;
            let angle = ctx.phase(0.004) + offset;
            let radius = 10.0 + 2.0 * (ctx.phase(0.01) + offset).sin();
            ctx.circle(angle.cos() * radius, angle.sin() * radius, 3.0, DDOS_DRONE);
        }
    }
}

struct Malware;

impl SpriteLayers for Malware {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let radius = 9.0 + ctx.wave(0.006);
        ctx.circle(0.0, 0.0, radius, VIRUS);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-4.0, -3.0, 3.0, 3.0, LIME);
        ctx.rect(1.0, -3.0, 3.0, 3.0, LIME);
        ctx.rect(-3.0, 3.0, 6.0, 1.5, Color::BLACK);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for spike in 0..6 {
            let direction = Vec2::from_angle(ctx.phase(0.002) + spike as f32 * TAU / 6.0);
            let side = direction.perp() * 2.0;
            ctx.polygon(
                &[
                    direction * 9.0 + side,
                    direction * 14.0,
                    direction * 9.0 - side,
                ],
                VIRUS_SPIKE,
            );
        }
    }
}

struct Spider;

impl SpriteLayers for Spider {
    fn anchor_offset(&self) -> f32 {
        LARGE_ANCHOR_OFFSET
    }

    fn shadow(&self) -> Shadow {
        Shadow::new(18.0, 18.0, 5.0, 0.3)
    }

    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.ellipse(0.0, 5.0, 10.0, 8.0, SPIDER_ABDOMEN);
        ctx.circle(0.0, -7.0, 6.0, SPIDER_HEAD);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let waist = Vec2::new(0.0, 5.0);
        ctx.polygon(&[Vec2::new(-3.0, 1.0), Vec2::new(3.0, 1.0), waist], SPIDER_RED);
        ctx.polygon(&[waist, Vec2::new(3.0, 9.0), Vec2::new(-3.0, 9.0)], SPIDER_RED);
        for (x, y) in [(-3.0, -9.0), (1.5, -9.0), (-2.0, -6.5), (0.5, -6.5)] {
            ctx.rect(x, y, 1.5, 1.5, SPIDER_RED);
        }
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let gait = ctx.phase(0.008);
        for leg in 0..8 {
            let side = if leg < 4 { -1.0 } else { 1.0 };
            let hip_y = -6.0 + (leg % 4) as f32 * 4.0;
            let sway = (gait + leg as f32 * 0.8).sin() * 3.0;
            let points = [
                Vec2::new(side * 5.0, hip_y),
                Vec2::new(side * 14.0, hip_y - 6.0 + sway),
                Vec2::new(side * 20.0, hip_y + 6.0 + sway * 0.5),
            ];
            ctx.polyline(&points, Stroke::new(SPIDER_LEG, 2.0));
        }
    }
}

struct Shielded {
    shield: f32,
    max_shield: f32,
}

impl Shielded {
    const RADIUS: f32 = 16.0;
    const GAP: f32 = 0.15;

    fn segment_count(&self) -> usize {
        if !self.max_shield.is_finite()
            || self.max_shield <= 0.0
            || self.shield.is_nan()
            || self.shield <= 0.0
        {
            return 0;
        }
        let slots = self.max_shield.ceil();
        self.shield.ceil().min(slots).min(MAX_SHIELD_SEGMENTS as f32) as usize
    }
}

impl SpriteLayers for Shielded {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-9.0, -10.0, 18.0, 20.0, ARMOR);
        let plate = ARMOR.lighten(0.2);
        ctx.rect(-9.0, -2.0, 18.0, 2.0, plate);
        ctx.rect(-9.0, 4.0, 18.0, 2.0, plate);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-6.0, -6.0, 12.0, 3.0, VISOR);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let glow = 0.3 + 0.3 * ctx.wave(0.008);
        ctx.rect(-7.0, -7.0, 14.0, 5.0, VISOR.with_alpha(glow));
    }

    fn overlay(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.ring(0.0, 0.0, Self::RADIUS, Stroke::new(SHIELD_RING, 1.0));

        let segments = self.segment_count();
        if segments == 0 {
            return;
        }
        let span = TAU / self.max_shield;
        let gap = Self::GAP.min(span * 0.2);
        let rotation = ctx.phase(0.001) - FRAC_PI_2;
        for segment in 0..segments {
            let start = rotation + segment as f32 * span + gap * 0.5;
            ctx.arc(
                Self::RADIUS,
                start,
                start + span - gap,
                Stroke::new(SHIELD_SEGMENT, 3.0),
            );
        }
    }
}

struct Voltage;

impl SpriteLayers for Voltage {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, 0.0, 8.0, VOLTAGE_ORB);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, 0.0, 4.0, Color::WHITE);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let glow = 11.0 + ctx.wave(0.012) * 1.5;
        ctx.circle(0.0, 0.0, glow, VOLTAGE_ORB.with_alpha(0.25));

        for spark in 0..4 {
            let direction = Vec2::from_angle(ctx.phase(0.003) + spark as f32 * TAU / 4.0);
            let kink = direction.perp() * ctx.jitter(2.0);
            let points = [direction * 8.0, direction * 11.0 + kink, direction * 14.0];
            ctx.polyline(&points, Stroke::new(VOLTAGE_SPARK, 1.0));
        }
    }
}

struct Replicator {
    is_original: bool,
}

impl Replicator {
    fn opacity(&self) -> f32 {
        if self.is_original {
            1.0
        } else {
            0.5
        }
    }
}

impl SpriteLayers for Replicator {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let opacity = self.opacity();
        ctx.circle(0.0, 0.0, 9.0, CELL.fade(opacity));
        ctx.ring(0.0, 0.0, 9.0, Stroke::new(CELL.lighten(0.4).fade(opacity), 1.0));
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, 0.0, 3.5, NUCLEUS.fade(self.opacity()));
        if self.is_original {
            ctx.rect(-0.75, -2.5, 1.5, 5.0, Color::WHITE);
            ctx.rect(-2.5, -0.75, 5.0, 1.5, Color::WHITE);
        }
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let spread = 4.0 + 2.0 * ctx.wave(0.004);
        let daughter = CELL.lighten(0.2).fade(self.opacity() * 0.6);
        ctx.circle(-spread, 0.0, 2.0, daughter);
        ctx.circle(spread, 0.0, 2.0, daughter);
    }
}

struct Phoenix {
    is_reviving: bool,
}

impl SpriteLayers for Phoenix {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.ellipse(0.0, 2.0, 5.0, 7.0, PHOENIX_BODY);
        ctx.circle(0.0, -7.0, 3.5, PHOENIX_HEAD);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.polygon(
            &[
                Vec2::new(-1.0, -10.0),
                Vec2::new(1.0, -10.0),
                Vec2::new(0.0, -13.0),
            ],
            EMBER,
        );
        ctx.rect(-1.5, -8.0, 1.0, 1.0, Color::BLACK);
        ctx.rect(0.5, -8.0, 1.0, 1.0, Color::BLACK);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let flap = ctx.wave(0.01) * 4.0;
        for side in [-1.0_f32, 1.0] {
            ctx.polygon(
                &[
                    Vec2::new(side * 3.0, 0.0),
                    Vec2::new(side * 14.0, -6.0 + flap),
                    Vec2::new(side * 10.0, 4.0),
                ],
                PHOENIX_WING,
            );
        }

        for (index, x) in [-3.0_f32, -0.5, 2.0].into_iter().enumerate() {
            let height = 4.0 + 2.0 * (ctx.phase(0.015) + index as f32).sin();
            ctx.rect(x, 8.0, 1.5, height, EMBER.with_alpha(0.8));
        }
    }

    fn overlay(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        if !self.is_reviving {
            return;
        }
        let rise = ctx.phase(0.003) / TAU;
        ctx.ring(
            0.0,
            0.0,
            6.0 + rise * 12.0,
            Stroke::new(EMBER.with_alpha(1.0 - rise), 2.0),
        );
        for ember in 0..4 {
            let angle = ctx.phase(0.002) + ember as f32 * FRAC_PI_2;
            ctx.rect(
                angle.cos() * 10.0 - 1.0,
                angle.sin() * 10.0 - 1.0 - rise * 6.0,
                2.0,
                2.0,
                EMBER.with_alpha(1.0 - rise),
            );
        }
    }
}

struct Worm;

impl SpriteLayers for Worm {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for segment in (0..5).rev() {
            let shade = WORM_BODY.lighten(segment as f32 * 0.08);
            ctx.circle(
                10.0 - segment as f32 * 5.0,
                0.0,
                4.5 - segment as f32 * 0.4,
                shade,
            );
        }
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(11.0, -2.5, 1.5, 1.5, Color::BLACK);
        ctx.rect(11.0, 1.0, 1.5, 1.5, Color::BLACK);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let cycle = ctx.phase(0.003) / TAU;
        for packet in 0..3 {
            let travel = (cycle + packet as f32 / 3.0).fract();
            let bob = (ctx.phase(0.008) + packet as f32).sin();
            ctx.rect(
                -10.0 + travel * 20.0 - 1.0,
                -7.0 + bob,
                2.0,
                2.0,
                DATA_BIT.with_alpha(0.9),
            );
        }
    }
}

struct PortalMiner;

impl SpriteLayers for PortalMiner {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-8.0, -6.0, 16.0, 14.0, MINER_SUIT);
        ctx.rect(-6.0, -10.0, 12.0, 4.0, MINER_HELMET);
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, -9.0, 1.5, WARNING);
        ctx.polygon(
            &[
                Vec2::new(8.0, -2.0),
                Vec2::new(14.0, 1.0),
                Vec2::new(8.0, 4.0),
            ],
            DRILL,
        );
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let center = ctx.center();
        let radius = 15.0 + ctx.wave(0.004);
        let stroke = Stroke::new(PORTAL.with_alpha(0.6), 1.5);
        with_line_dash(ctx.surface(), &PORTAL_DASH, |surface| {
            surface.stroke_circle(center, radius, stroke);
        });

        for mote in 0..3 {
            let angle = -ctx.phase(0.005) + mote as f32 * TAU / 3.0;
            ctx.rect(
                angle.cos() * radius - 1.0,
                angle.sin() * radius - 1.0,
                2.0,
                2.0,
                PORTAL,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        recording::{DrawOp, RecordingSurface},
        SequenceRandom,
    };

    fn record(paint: impl FnOnce(&mut RecordingSurface, &mut Frame<'_>)) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::new(vec![0.25, 0.75]);
        let mut frame = Frame::new(2_000.0, &mut random);
        paint(&mut surface, &mut frame);
        surface
    }

    fn arcs(surface: &RecordingSurface) -> usize {
        surface.count(|op| matches!(op, DrawOp::StrokeArc { .. }))
    }

    fn rings(surface: &RecordingSurface) -> usize {
        surface.count(|op| matches!(op, DrawOp::StrokeCircle { .. }))
    }

    #[test]
    fn shielded_enemy_draws_one_arc_per_shield_point() {
        let surface = record(|surface, frame| {
            draw_shielded_enemy(surface, frame, Vec2::ZERO, 3.0, 5.0);
        });

        assert_eq!(arcs(&surface), 3);
        assert_eq!(rings(&surface), 1);
    }

    #[test]
    fn shielded_enemy_keeps_the_ring_without_shield() {
        for (shield, max_shield) in [(0.0, 5.0), (3.0, 0.0), (f32::NAN, 5.0), (2.0, f32::INFINITY)]
        {
            let surface = record(|surface, frame| {
                draw_shielded_enemy(surface, frame, Vec2::ZERO, shield, max_shield);
            });

            assert_eq!(arcs(&surface), 0, "shield {shield}/{max_shield}");
            assert_eq!(rings(&surface), 1);
            assert!(surface.is_finite());
        }
    }

    #[test]
    fn shield_segments_never_exceed_the_slots() {
        let surface = record(|surface, frame| {
            draw_shielded_enemy(surface, frame, Vec2::ZERO, 9.0, 4.0);
        });
        assert_eq!(arcs(&surface), 4);

        let surface = record(|surface, frame| {
            draw_shielded_enemy(surface, frame, Vec2::ZERO, 1e9, 1e9);
        });
        assert_eq!(arcs(&surface), MAX_SHIELD_SEGMENTS);
    }

    #[test]
    fn portal_miner_restores_solid_dash_pattern() {
        let surface = record(|surface, frame| {
            draw_portal_miner_enemy(surface, frame, Vec2::ZERO);
        });

        let dash_changes: Vec<&[f32]> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetLineDash { pattern } => Some(pattern.as_slice()),
                _ => None,
            })
            .collect();
        assert_eq!(dash_changes, vec![&PORTAL_DASH[..], &[][..]]);
        assert!(surface.line_dash().is_empty());
    }

    #[test]
    fn spider_strokes_eight_legs_with_three_joints() {
        let surface = record(|surface, frame| draw_spider_enemy(surface, frame, Vec2::ZERO));
        let legs: Vec<_> = surface.polylines().collect();

        assert_eq!(legs.len(), 8);
        assert!(legs.iter().all(|(points, _)| points.len() == 3));
        let left = legs[..4].iter().all(|(points, _)| points[2].x < 25.0);
        let right = legs[4..].iter().all(|(points, _)| points[2].x > 25.0);
        assert!(left && right);
    }

    #[test]
    fn spider_hourglass_is_two_triangles_meeting_at_the_waist() {
        let surface = record(|surface, frame| draw_spider_enemy(surface, frame, Vec2::ZERO));
        let marking: Vec<&[Vec2]> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillPolygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect();

        let waist = Vec2::new(25.0, 30.0);
        assert_eq!(marking.len(), 2);
        assert!(marking.iter().all(|points| points.len() == 3));
        assert!(marking.iter().all(|points| points.contains(&waist)));
    }

    #[test]
    fn spider_legs_sway_over_time() {
        let legs_at = |now| {
            let mut surface = RecordingSurface::new();
            let mut random = SequenceRandom::constant(0.5);
            let mut frame = Frame::new(now, &mut random);
            draw_spider_enemy(&mut surface, &mut frame, Vec2::ZERO);
            surface
                .polylines()
                .map(|(points, _)| points.to_vec())
                .collect::<Vec<_>>()
        };

        assert_ne!(legs_at(0.0), legs_at(100.0));
    }

    #[test]
    fn replicator_copies_are_translucent_and_lack_the_glyph() {
        let original = record(|surface, frame| {
            draw_replicator_enemy(surface, frame, Vec2::ZERO, true);
        });
        let copy = record(|surface, frame| {
            draw_replicator_enemy(surface, frame, Vec2::ZERO, false);
        });

        let white_rects = |surface: &RecordingSurface| {
            surface.count(|op| {
                matches!(op, DrawOp::FillRect { color, .. } if *color == Color::WHITE)
            })
        };
        assert_eq!(white_rects(&original), 2);
        assert_eq!(white_rects(&copy), 0);

        let body_alpha = |surface: &RecordingSurface| {
            surface
                .ops()
                .iter()
                .find_map(|op| match op {
                    DrawOp::FillCircle { radius, color, .. } if *radius == 9.0 => Some(color.alpha),
                    _ => None,
                })
                .expect("cell body recorded")
        };
        assert_eq!(body_alpha(&original), 1.0);
        assert_eq!(body_alpha(&copy), 0.5);
    }

    #[test]
    fn reviving_phoenix_adds_an_ember_ring() {
        let resting = record(|surface, frame| {
            draw_phoenix_enemy(surface, frame, Vec2::ZERO, false);
        });
        let reviving = record(|surface, frame| {
            draw_phoenix_enemy(surface, frame, Vec2::ZERO, true);
        });

        assert_eq!(rings(&resting), 0);
        assert_eq!(rings(&reviving), 1);
        assert_eq!(reviving.paint_count(), resting.paint_count() + 5);
    }
}
