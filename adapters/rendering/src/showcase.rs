//! Gallery scene that lays out every sprite and effect on one screen.
//!
//! The scene holds no state between frames: positions derive from the layout
//! parameters and attack progress derives from the frame clock through
//! [`AttackLoop`].

use glam::Vec2;
use proxy_defense_core::{EnemyKind, EnemyVisualState, TowerKind, TowerVisualState};

use crate::{
    attacks::{draw_explosion, draw_lightning},
    dispatch::draw_enemy_attack,
    sprites::{draw_enemy, draw_tower},
    DrawSurface, Frame,
};

/// Enemy kinds that fire an attack effect, in gallery order.
const ATTACKERS: [EnemyKind; 7] = [
    EnemyKind::Hacker,
    EnemyKind::Ddos,
    EnemyKind::Malware,
    EnemyKind::Spider,
    EnemyKind::Phoenix,
    EnemyKind::Worm,
    EnemyKind::PortalMiner,
];

/// Attack lanes span this many slots horizontally.
const LANE_SLOTS: f32 = 3.0;

/// Repeating `0 -> 1` progress derived from the frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackLoop {
    period_ms: f64,
}

impl AttackLoop {
    /// Creates a loop completing every `period_ms` milliseconds. A zero period is treated as one.
    #[must_use]
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
        }
    }

    /// Duration of one loop in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Progress in `[0, 1)` at `now_millis`, shifted by `phase` loops.
    #[must_use]
    pub fn progress(&self, now_millis: f64, phase: f32) -> f32 {
        (now_millis / self.period_ms + f64::from(phase)).rem_euclid(1.0) as f32
    }
}

impl Default for AttackLoop {
    fn default() -> Self {
        Self::new(1_200)
    }
}

/// Effect shown in one attack lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneEffect {
    /// Enemy attack routed through the dispatcher.
    Enemy(EnemyKind),
    /// Tower lightning tinted for the tower kind.
    Lightning(TowerKind),
}

/// Source, target and loop offset of one animated effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackLane {
    /// Effect drawn along the lane.
    pub effect: LaneEffect,
    /// Effect origin.
    pub from: Vec2,
    /// Effect target.
    pub to: Vec2,
    /// Loop offset so lanes do not pulse in unison.
    pub phase: f32,
}

/// Positions of every gallery entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseLayout {
    origin: Vec2,
    spacing: f32,
    attack_loop: AttackLoop,
    tower_state: TowerVisualState,
    enemy_state: EnemyVisualState,
}

impl ShowcaseLayout {
    /// Creates a layout with `spacing` pixels between neighbouring sprites.
    #[must_use]
    pub fn new(spacing: f32, attack_loop: AttackLoop) -> Self {
        Self {
            origin: Vec2::splat(spacing * 0.25),
            spacing,
            attack_loop,
            tower_state: TowerVisualState::default(),
            enemy_state: EnemyVisualState::default(),
        }
    }

    /// Moves the top-left corner of the gallery.
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the state used for the tower row.
    #[must_use]
    pub fn with_tower_state(mut self, state: TowerVisualState) -> Self {
        self.tower_state = state;
        self
    }

    /// Sets the state used for the enemy row.
    #[must_use]
    pub fn with_enemy_state(mut self, state: EnemyVisualState) -> Self {
        self.enemy_state = state;
        self
    }

    /// Loop driving attack progress.
    #[must_use]
    pub fn attack_loop(&self) -> AttackLoop {
        self.attack_loop
    }

    /// Anchor of every tower kind, first row.
    pub fn tower_slots(&self) -> impl Iterator<Item = (TowerKind, Vec2)> + '_ {
        TowerKind::ALL
            .into_iter()
            .enumerate()
            .map(|(column, kind)| (kind, self.slot(column as f32, 0.0)))
    }

    /// Anchor of every enemy kind, second row.
    pub fn enemy_slots(&self) -> impl Iterator<Item = (EnemyKind, Vec2)> + '_ {
        EnemyKind::ALL
            .into_iter()
            .enumerate()
            .map(|(column, kind)| (kind, self.slot(column as f32, 1.0)))
    }

    /// Attack lanes: enemy effects in the left column, tower lightning in the right.
    #[must_use]
    pub fn attack_lanes(&self) -> Vec<AttackLane> {
        let enemy_effects = ATTACKERS.into_iter().map(LaneEffect::Enemy);
        let lightning = TowerKind::ALL.into_iter().map(LaneEffect::Lightning);
        let total = (ATTACKERS.len() + TowerKind::ALL.len()) as f32;

        let mut lanes = Vec::with_capacity(total as usize);
        for (row, effect) in enemy_effects.enumerate() {
            lanes.push(self.lane(effect, 0.0, row, lanes.len() as f32 / total));
        }
        for (row, effect) in lightning.enumerate() {
            lanes.push(self.lane(effect, LANE_SLOTS + 1.0, row, lanes.len() as f32 / total));
        }
        lanes
    }

    /// Centre of the looping explosion.
    #[must_use]
    pub fn explosion_center(&self) -> Vec2 {
        self.slot(2.0 * LANE_SLOTS + 2.5, 4.0)
    }

    /// Width and height covered by the gallery, origin excluded.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        let rows = 3.0 + ATTACKERS.len() as f32 * 0.5;
        Vec2::new(EnemyKind::ALL.len() as f32, rows) * self.spacing
    }

    /// Paints the whole gallery for the current frame.
    pub fn render(&self, surface: &mut dyn DrawSurface, frame: &mut Frame<'_>) {
        for (kind, position) in self.tower_slots() {
            draw_tower(surface, frame, kind, position, self.tower_state);
        }
        for (kind, position) in self.enemy_slots() {
            draw_enemy(surface, frame, kind, position, self.enemy_state);
        }
        self.render_variants(surface, frame);

        let now = frame.now_millis();
        for lane in self.attack_lanes() {
            let progress = self.attack_loop.progress(now, lane.phase);
            match lane.effect {
                LaneEffect::Enemy(kind) => {
                    draw_enemy_attack(surface, frame, lane.from, lane.to, progress, kind);
                }
                LaneEffect::Lightning(kind) => {
                    draw_lightning(surface, frame, lane.from, lane.to, progress, Some(kind));
                }
            }
        }

        let blast = self.attack_loop.progress(now, 0.5);
        draw_explosion(surface, frame, self.explosion_center(), blast);
    }

    /// Third row: state-dependent looks the default rows do not show.
    fn render_variants(&self, surface: &mut dyn DrawSurface, frame: &mut Frame<'_>) {
        let damaged = TowerVisualState::new(
            self.tower_state.max_health * 0.5,
            self.tower_state.max_health,
        );
        draw_tower(surface, frame, TowerKind::Firewall, self.slot(0.0, 2.0), damaged);
        draw_enemy(
            surface,
            frame,
            EnemyKind::Replicator,
            self.slot(1.0, 2.0),
            EnemyVisualState::clone_copy(),
        );
        draw_enemy(
            surface,
            frame,
            EnemyKind::Phoenix,
            self.slot(2.0, 2.0),
            EnemyVisualState::reviving(),
        );
        draw_enemy(
            surface,
            frame,
            EnemyKind::Shielded,
            self.slot(3.0, 2.0),
            EnemyVisualState::shielded(0.0, self.enemy_state.max_shield),
        );
    }

    fn lane(&self, effect: LaneEffect, column: f32, row: usize, phase: f32) -> AttackLane {
        let y = 3.0 + row as f32 * 0.5;
        AttackLane {
            effect,
            from: self.slot(column, y),
            to: self.slot(column + LANE_SLOTS, y),
            phase,
        }
    }

    fn slot(&self, column: f32, row: f32) -> Vec2 {
        self.origin + Vec2::new(column, row) * self.spacing
    }
}

impl Default for ShowcaseLayout {
    fn default() -> Self {
        Self::new(80.0, AttackLoop::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        recording::{DrawOp, RecordingSurface},
        SequenceRandom,
    };

    #[test]
    fn attack_loop_wraps_into_unit_range() {
        let attack_loop = AttackLoop::new(1_000);

        assert_eq!(attack_loop.progress(0.0, 0.0), 0.0);
        assert!((attack_loop.progress(250.0, 0.0) - 0.25).abs() < 1e-6);
        assert!((attack_loop.progress(1_250.0, 0.0) - 0.25).abs() < 1e-6);
        assert!((attack_loop.progress(900.0, 0.5) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn zero_period_does_not_divide_by_zero() {
        let attack_loop = AttackLoop::new(0);

        assert_eq!(attack_loop.period_ms(), 1.0);
        assert!(attack_loop.progress(12_345.5, 0.0).is_finite());
    }

    #[test]
    fn layout_covers_every_kind() {
        let layout = ShowcaseLayout::default();

        assert_eq!(layout.tower_slots().count(), TowerKind::ALL.len());
        assert_eq!(layout.enemy_slots().count(), EnemyKind::ALL.len());

        let lanes = layout.attack_lanes();
        for kind in EnemyKind::ALL.into_iter().filter(|kind| kind.has_attack_effect()) {
            let effect = LaneEffect::Enemy(kind);
            assert!(lanes.iter().any(|lane| lane.effect == effect), "{kind} missing");
        }
        for kind in TowerKind::ALL {
            let effect = LaneEffect::Lightning(kind);
            assert!(lanes.iter().any(|lane| lane.effect == effect), "{kind} missing");
        }
    }

    #[test]
    fn lanes_stay_inside_the_extent() {
        let layout = ShowcaseLayout::new(50.0, AttackLoop::default()).with_origin(Vec2::ZERO);
        let extent = layout.extent();

        for lane in layout.attack_lanes() {
            for point in [lane.from, lane.to] {
                assert!(point.x <= extent.x && point.y <= extent.y, "{lane:?} escapes");
            }
            assert!((0.0..1.0).contains(&lane.phase));
        }
    }

    #[test]
    fn render_paints_the_full_gallery_deterministically() {
        let layout = ShowcaseLayout::default()
            .with_tower_state(TowerVisualState::new(85.0, 100.0))
            .with_enemy_state(EnemyVisualState::shielded(3.0, 5.0));
        let render = || {
            let mut surface = RecordingSurface::new();
            let mut random = SequenceRandom::new(vec![0.1, 0.4, 0.7]);
            let mut frame = Frame::new(3_600.0, &mut random);
            layout.render(&mut surface, &mut frame);
            surface
        };

        let surface = render();
        assert!(surface.is_finite());
        assert!(surface.line_dash().is_empty());
        assert!(surface.count(|op| matches!(op, DrawOp::StrokeArc { .. })) >= 3);
        assert_eq!(surface, render());
    }
}
