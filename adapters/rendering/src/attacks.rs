//! Attack and projectile effects drawn between a source and a target.
//!
//! Every effect walks the same skeleton: build a displaced polyline between the
//! endpoints, stroke it (the first stroke is always the primary pass), then
//! layer particles and, for some kinds, an impact burst once progress passes
//! [`IMPACT_THRESHOLD`]. Primary alpha follows `1 - progress * k` with a
//! per-effect `k`; several effects keep part of their glow at impact.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use glam::Vec2;
use proxy_defense_core::TowerKind;

use crate::{
    geometry::{build_displaced_polyline, offset_parallel},
    Color, DrawSurface, Frame, Stroke,
};

/// Interior points of a tower lightning bolt.
pub const LIGHTNING_SEGMENTS: usize = 8;
/// Interior points of a hacker bolt.
pub const HACKER_SEGMENTS: usize = 12;
/// Interior points of each DDoS bolt.
pub const DDOS_SEGMENTS: usize = 6;
/// Interior points of a malware wave.
pub const MALWARE_SEGMENTS: usize = 10;
/// Interior points of a spider web strand.
pub const SPIDER_SEGMENTS: usize = 6;
/// Interior points of a phoenix fire stream.
pub const PHOENIX_SEGMENTS: usize = 8;
/// Interior points of a worm beam.
pub const WORM_SEGMENTS: usize = 8;
/// Interior points of a portal miner beam.
pub const PORTAL_MINER_SEGMENTS: usize = 6;

/// Progress after which impact bursts start expanding.
pub const IMPACT_THRESHOLD: f32 = 0.7;

/// Perpendicular offsets of the three parallel DDoS bolts.
const DDOS_LANES: [f32; 3] = [-6.0, 0.0, 6.0];

const LIGHTNING_GREEN: Color = Color::from_rgb_u8(0, 255, 100);
const LIGHTNING_BLUE: Color = Color::from_rgb_u8(30, 144, 255);
const LIGHTNING_PURPLE: Color = Color::from_rgb_u8(186, 85, 211);

const HACKER_GREEN: Color = Color::from_rgb_u8(0, 255, 65);
const HACKER_CORE: Color = Color::from_rgb_u8(200, 255, 200);
const DDOS_RED: Color = Color::from_rgb_u8(255, 50, 50);
const DDOS_PACKET: Color = Color::from_rgb_u8(255, 165, 0);
const MALWARE_PURPLE: Color = Color::from_rgb_u8(153, 50, 204);
const MALWARE_INNER: Color = Color::from_rgb_u8(255, 105, 180);
const WEB: Color = Color::from_rgb_u8(230, 230, 230);
const VENOM: Color = Color::from_rgb_u8(124, 252, 0);
const FIRE: Color = Color::from_rgb_u8(255, 120, 0);
const FIRE_CORE: Color = Color::from_rgb_u8(255, 230, 80);
const FIRE_BURST: Color = Color::new(1.0, 0.8, 0.2, 1.0);
const WORM_BEAM: Color = Color::from_rgb_u8(50, 205, 50);
const DATA_PACKET: Color = Color::from_rgb_u8(0, 255, 255);
const PORTAL_BEAM: Color = Color::from_rgb_u8(138, 43, 226);
const PORTAL_INNER: Color = Color::from_rgb_u8(230, 200, 255);
const VOID: Color = Color::new(0.1, 0.0, 0.2, 1.0);
const TEAR: Color = Color::from_rgb_u8(20, 0, 40);
const BLAST: Color = Color::from_rgb_u8(255, 140, 0);
const BLAST_CORE: Color = Color::from_rgb_u8(255, 230, 120);
const DEBRIS: Color = Color::from_rgb_u8(120, 120, 120);

/// Stroke color of a lightning bolt fired by `tower`.
#[must_use]
pub fn lightning_color(tower: Option<TowerKind>) -> Color {
    match tower {
        Some(TowerKind::Antivirus) => LIGHTNING_GREEN,
        Some(TowerKind::Proxy) => LIGHTNING_BLUE,
        Some(TowerKind::Chain) => LIGHTNING_PURPLE,
        _ => Color::WHITE,
    }
}

/// Primary alpha `1 - progress * rate`. Not clamped.
#[must_use]
pub fn fade_alpha(progress: f32, rate: f32) -> f32 {
    1.0 - progress * rate
}

/// Normalised burst expansion once `progress` passes [`IMPACT_THRESHOLD`].
#[must_use]
pub fn impact_burst(progress: f32) -> Option<f32> {
    (progress > IMPACT_THRESHOLD)
        .then(|| (progress - IMPACT_THRESHOLD) / (1.0 - IMPACT_THRESHOLD))
}

/// Paints a tower lightning bolt; geometry is shared, only the color depends on `tower`.
pub fn draw_lightning(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
    tower: Option<TowerKind>,
) {
    let alpha = fade_alpha(progress, 1.0);
    let color = lightning_color(tower);
    let points = build_displaced_polyline(from, to, LIGHTNING_SEGMENTS, |_, _| frame.jitter(10.0));

    surface.stroke_polyline(&points, Stroke::new(color.with_alpha(alpha), 2.0));
    surface.stroke_polyline(&points, Stroke::new(color.with_alpha(alpha * 0.3), 6.0));
    surface.stroke_polyline(&points, Stroke::new(Color::WHITE.with_alpha(alpha), 1.0));
}

/// Paints a chaotic green hacker bolt with glitch squares.
pub fn draw_hacker_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.8);
    let points = build_displaced_polyline(from, to, HACKER_SEGMENTS, |_, _| frame.jitter(15.0));

    surface.stroke_polyline(&points, Stroke::new(HACKER_GREEN.with_alpha(alpha), 2.0));
    surface.stroke_polyline(&points, Stroke::new(HACKER_CORE.with_alpha(alpha * 0.8), 1.0));

    for _ in 0..5 {
        let base = from.lerp(to, frame.random());
        let scatter = Vec2::new(frame.jitter(10.0), frame.jitter(10.0));
        let size = 2.0 + frame.random() * 3.0;
        surface.fill_rect(
            base + scatter - Vec2::splat(size * 0.5),
            Vec2::splat(size),
            HACKER_GREEN.with_alpha(alpha * 0.7),
        );
    }
}

/// Paints three parallel DDoS bolts with packets streaming towards the target.
pub fn draw_ddos_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.6);

    for lane in DDOS_LANES {
        let (start, end) = offset_parallel(from, to, lane);
        let points = build_displaced_polyline(start, end, DDOS_SEGMENTS, |_, _| frame.jitter(8.0));
        surface.stroke_polyline(&points, Stroke::new(DDOS_RED.with_alpha(alpha), 1.5));
    }

    for packet in 0..4 {
        let travel = (progress + packet as f32 * 0.25).fract();
        let position = from.lerp(to, travel);
        surface.fill_rect(
            position - Vec2::splat(1.5),
            Vec2::splat(3.0),
            DDOS_PACKET.with_alpha(alpha),
        );
    }
}

/// Paints an organic purple malware wave with infection particles.
pub fn draw_malware_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.7);
    let points = build_displaced_polyline(from, to, MALWARE_SEGMENTS, |_, t| {
        (t * PI * 4.0).sin() * 10.0
    });

    surface.stroke_polyline(&points, Stroke::new(MALWARE_PURPLE.with_alpha(alpha), 3.0));
    surface.stroke_polyline(&points, Stroke::new(MALWARE_INNER.with_alpha(alpha * 0.8), 1.0));

    for point in points.iter().skip(1).step_by(2).take(6) {
        let scatter = Vec2::new(frame.jitter(4.0), frame.jitter(4.0));
        surface.fill_rect(
            *point + scatter - Vec2::ONE,
            Vec2::splat(2.0),
            MALWARE_INNER.with_alpha(alpha * 0.6),
        );
    }
}

/// Paints an evenly waved web strand with venom drops sliding down it.
pub fn draw_spider_attack(
    surface: &mut dyn DrawSurface,
    _frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.3);
    let points = build_displaced_polyline(from, to, SPIDER_SEGMENTS, |_, t| {
        (t * PI * 3.0).sin() * 5.0
    });

    surface.stroke_polyline(&points, Stroke::new(WEB.with_alpha(alpha), 1.0));

    let interior = &points[1..points.len() - 1];
    for drop in interior.iter().step_by(2) {
        surface.fill_rect(
            *drop + Vec2::new(-1.0, progress * 6.0),
            Vec2::splat(2.0),
            VENOM.with_alpha(alpha),
        );
    }
}

/// Paints a flickering phoenix fire stream with an impact burst.
pub fn draw_phoenix_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.5);
    let flicker = frame.phase(0.02);
    let points = build_displaced_polyline(from, to, PHOENIX_SEGMENTS, |_, t| {
        (t * TAU + flicker).sin() * 8.0
    });

    surface.stroke_polyline(&points, Stroke::new(FIRE.with_alpha(alpha), 4.0));
    surface.stroke_polyline(&points, Stroke::new(FIRE_CORE.with_alpha(alpha), 2.0));

    for _ in 0..6 {
        let base = from.lerp(to, frame.random());
        let scatter = Vec2::new(frame.jitter(5.0), frame.jitter(5.0));
        surface.fill_rect(
            base + scatter - Vec2::ONE,
            Vec2::splat(2.0),
            FIRE_CORE.with_alpha(alpha * 0.8),
        );
    }

    if let Some(burst) = impact_burst(progress) {
        let radius = 4.0 + burst * 16.0;
        let fade = 1.0 - burst;
        surface.stroke_circle(to, radius, Stroke::new(FIRE_BURST.with_alpha(fade), 2.0));
        for spark in 0..8 {
            let position = to + Vec2::from_angle(spark as f32 * FRAC_PI_4) * radius;
            surface.fill_rect(
                position - Vec2::ONE,
                Vec2::splat(2.0),
                FIRE.with_alpha(fade),
            );
        }
    }
}

/// Paints a jagged worm beam carrying data packets, sparking on impact.
pub fn draw_worm_attack(
    surface: &mut dyn DrawSurface,
    _frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.8);
    let points = build_displaced_polyline(from, to, WORM_SEGMENTS, |index, _| {
        if index % 2 == 0 {
            6.0
        } else {
            -6.0
        }
    });

    surface.stroke_polyline(&points, Stroke::new(WORM_BEAM.with_alpha(alpha), 2.0));

    for packet in 0..5 {
        let travel = (progress * 2.0 + packet as f32 * 0.2).fract();
        let position = from.lerp(to, travel);
        surface.fill_rect(
            position - Vec2::new(2.0, 1.5),
            Vec2::new(4.0, 3.0),
            DATA_PACKET.with_alpha(alpha),
        );
    }

    if let Some(burst) = impact_burst(progress) {
        let reach = burst * 12.0;
        for spark in 0..6 {
            let position = to + Vec2::from_angle(spark as f32 * TAU / 6.0) * reach;
            surface.fill_rect(
                position - Vec2::ONE,
                Vec2::splat(2.0),
                DATA_PACKET.with_alpha(1.0 - burst),
            );
        }
    }
}

/// Paints a distorting portal beam with dimensional tears and a void burst.
pub fn draw_portal_miner_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 0.4);
    let distortion = frame.phase(0.01);
    let points = build_displaced_polyline(from, to, PORTAL_MINER_SEGMENTS, |_, t| {
        (t * TAU + distortion).sin() * 12.0
    });

    surface.stroke_polyline(&points, Stroke::new(PORTAL_BEAM.with_alpha(alpha), 3.0));
    surface.stroke_polyline(&points, Stroke::new(PORTAL_INNER.with_alpha(alpha * 0.7), 1.0));

    let spin = frame.phase(0.005);
    for (index, t) in [0.25_f32, 0.5, 0.75].into_iter().enumerate() {
        let center = from.lerp(to, t);
        let rotation = spin + index as f32;
        let size = 3.0 + 2.0 * (distortion + index as f32).sin();
        let tear: Vec<Vec2> = (0..4)
            .map(|corner| {
                let reach = if corner % 2 == 0 { size } else { size * 0.5 };
                center + Vec2::from_angle(rotation + corner as f32 * FRAC_PI_2) * reach
            })
            .collect();
        surface.fill_polygon(&tear, TEAR.with_alpha(alpha));
    }

    if let Some(burst) = impact_burst(progress) {
        let radius = burst * 14.0;
        surface.fill_circle(to, radius, VOID.with_alpha(0.8 * (1.0 - burst)));
        surface.stroke_circle(
            to,
            radius + 2.0,
            Stroke::new(PORTAL_BEAM.with_alpha(1.0 - burst), 2.0),
        );
    }
}

/// Paints an explosion centred on `position`, expanding and fading as `progress` grows.
pub fn draw_explosion(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
    progress: f32,
) {
    let alpha = fade_alpha(progress, 1.0);
    let radius = 5.0 + progress * 25.0;

    surface.fill_circle(position, radius, BLAST.with_alpha(alpha * 0.6));
    surface.fill_circle(position, radius * 0.5, BLAST_CORE.with_alpha(alpha * 0.8));
    surface.stroke_circle(position, radius, Stroke::new(FIRE_BURST.with_alpha(alpha), 2.0));

    for shard in 0..8 {
        let angle = shard as f32 * FRAC_PI_4 + frame.jitter(0.2);
        let center = position + Vec2::from_angle(angle) * radius * 0.8;
        surface.fill_rect(
            center - Vec2::splat(1.5),
            Vec2::splat(3.0),
            DEBRIS.with_alpha(alpha),
        );
    }
}
