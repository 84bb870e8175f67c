use glam::Vec2;
use proxy_defense_core::{EnemyKind, TowerKind};
use proxy_defense_rendering::{
    attacks::{
        DDOS_SEGMENTS, HACKER_SEGMENTS, LIGHTNING_SEGMENTS, MALWARE_SEGMENTS,
        PHOENIX_SEGMENTS, PORTAL_MINER_SEGMENTS, SPIDER_SEGMENTS, WORM_SEGMENTS,
    },
    draw_ddos_attack, draw_enemy_attack, draw_enemy_attack_tag, draw_explosion,
    draw_firewall_tower, draw_hacker_attack, draw_lightning, draw_malware_attack,
    draw_phoenix_attack, draw_portal_miner_attack, draw_portal_miner_enemy, draw_shielded_enemy,
    draw_spider_attack, draw_worm_attack,
    recording::{DrawOp, RecordingSurface},
    DrawSurface, Frame, SequenceRandom,
};

type AttackDrawer = fn(&mut dyn DrawSurface, &mut Frame<'_>, Vec2, Vec2, f32);

fn lightning(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, from: Vec2, to: Vec2, p: f32) {
    draw_lightning(surface, frame, from, to, p, Some(TowerKind::Chain));
}

const ATTACKS: [(&str, AttackDrawer, usize); 8] = [
    ("lightning", lightning, LIGHTNING_SEGMENTS),
    ("hacker", draw_hacker_attack, HACKER_SEGMENTS),
    ("ddos", draw_ddos_attack, DDOS_SEGMENTS),
    ("malware", draw_malware_attack, MALWARE_SEGMENTS),
    ("spider", draw_spider_attack, SPIDER_SEGMENTS),
    ("phoenix", draw_phoenix_attack, PHOENIX_SEGMENTS),
    ("worm", draw_worm_attack, WORM_SEGMENTS),
    ("portal_miner", draw_portal_miner_attack, PORTAL_MINER_SEGMENTS),
];

fn record_attack(drawer: AttackDrawer, from: Vec2, to: Vec2, progress: f32) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    let mut random = SequenceRandom::new(vec![0.15, 0.85, 0.5, 0.35]);
    let mut frame = Frame::new(5_000.0, &mut random);
    drawer(&mut surface, &mut frame, from, to, progress);
    surface
}

fn primary_alpha(drawer: AttackDrawer, progress: f32) -> f32 {
    record_attack(drawer, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), progress)
        .primary_polyline()
        .map(|(_, stroke)| stroke.color.alpha)
        .expect("attack strokes a primary polyline")
}

#[test]
fn primary_alpha_never_increases_with_progress() {
    for (name, drawer, _) in ATTACKS {
        assert_eq!(primary_alpha(drawer, 0.0), 1.0, "{name} starts faded");

        let mut previous = f32::INFINITY;
        for step in 0..=10 {
            let alpha = primary_alpha(drawer, step as f32 / 10.0);
            assert!(alpha <= previous, "{name} brightened at step {step}");
            previous = alpha;
        }
    }
}

#[test]
fn polylines_hold_segments_plus_endpoints() {
    for (name, drawer, segments) in ATTACKS {
        let surface = record_attack(drawer, Vec2::new(5.0, 5.0), Vec2::new(95.0, 45.0), 0.4);

        assert!(surface.polylines().count() > 0, "{name} stroked nothing");
        for (points, _) in surface.polylines() {
            assert_eq!(points.len(), segments + 2, "{name} vertex count");
        }
    }
}

#[test]
fn degenerate_segments_stay_finite() {
    let point = Vec2::new(42.0, 42.0);
    for (name, drawer, _) in ATTACKS {
        for progress in [0.0, 0.5, 0.75, 1.0] {
            let surface = record_attack(drawer, point, point, progress);
            assert!(surface.is_finite(), "{name} produced NaN at {progress}");
        }
    }

    let mut surface = RecordingSurface::new();
    let mut random = SequenceRandom::constant(0.5);
    let mut frame = Frame::new(0.0, &mut random);
    draw_explosion(&mut surface, &mut frame, point, 0.5);
    assert!(surface.is_finite());
}

#[test]
fn firewall_shield_requires_strictly_more_than_seventy_percent() {
    let circles = |health: f32| {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::constant(0.5);
        let mut frame = Frame::new(750.0, &mut random);
        draw_firewall_tower(&mut surface, &mut frame, Vec2::ZERO, health, 100.0);
        surface.count(|op| matches!(op, DrawOp::FillCircle { .. }))
    };

    assert_eq!(circles(71.0), 1);
    assert_eq!(circles(70.0), 0);
    assert_eq!(circles(100.0), 1);
}

#[test]
fn shielded_enemy_draws_one_arc_per_remaining_point() {
    let mut surface = RecordingSurface::new();
    let mut random = SequenceRandom::constant(0.5);
    let mut frame = Frame::new(0.0, &mut random);
    draw_shielded_enemy(&mut surface, &mut frame, Vec2::ZERO, 3.0, 5.0);

    assert_eq!(surface.count(|op| matches!(op, DrawOp::StrokeArc { .. })), 3);
    assert_eq!(surface.count(|op| matches!(op, DrawOp::StrokeCircle { .. })), 1);
}

#[test]
fn dispatcher_matches_direct_worm_call() {
    let from = Vec2::new(10.0, 80.0);
    let to = Vec2::new(70.0, 20.0);

    let mut routed = RecordingSurface::new();
    let mut random = SequenceRandom::new(vec![0.3, 0.6]);
    let mut frame = Frame::new(1_500.0, &mut random);
    draw_enemy_attack(&mut routed, &mut frame, from, to, 0.9, EnemyKind::Worm);

    let direct = {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::new(vec![0.3, 0.6]);
        let mut frame = Frame::new(1_500.0, &mut random);
        draw_worm_attack(&mut surface, &mut frame, from, to, 0.9);
        surface
    };

    assert_eq!(routed, direct);
}

#[test]
fn unknown_tags_leave_the_surface_untouched() {
    let mut surface = RecordingSurface::new();
    let mut random = SequenceRandom::constant(0.5);
    let mut frame = Frame::new(0.0, &mut random);
    draw_enemy_attack_tag(
        &mut surface,
        &mut frame,
        Vec2::ZERO,
        Vec2::ONE,
        0.5,
        "unknown",
    );

    assert!(surface.ops().is_empty());
}

#[test]
fn portal_miner_restores_a_solid_dash() {
    let mut surface = RecordingSurface::new();
    let mut random = SequenceRandom::constant(0.5);
    let mut frame = Frame::new(2_000.0, &mut random);
    draw_portal_miner_enemy(&mut surface, &mut frame, Vec2::new(30.0, 30.0));

    assert!(surface.line_dash().is_empty());
    let patterns: Vec<&[f32]> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::SetLineDash { pattern } => Some(pattern.as_slice()),
            _ => None,
        })
        .collect();
    assert_eq!(patterns, vec![&[4.0, 3.0][..], &[][..]]);
}
