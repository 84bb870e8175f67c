//! Pixel-art sprite drawers for towers and enemies.
//!
//! Every sprite paints the same stack of layers: a ground shadow, the static
//! body, static ornaments, time-driven decoration, and finally overlays gated
//! by entity state. [`SpriteLayers`] is that template; each kind only fills in
//! the layers it needs.

mod enemies;
mod towers;

use glam::Vec2;
use proxy_defense_core::{EnemyKind, EnemyVisualState, TowerKind, TowerVisualState};

use crate::{Color, DrawSurface, Frame, Stroke};

pub use enemies::{
    draw_ddos_enemy, draw_hacker_enemy, draw_malware_enemy, draw_phoenix_enemy,
    draw_portal_miner_enemy, draw_replicator_enemy, draw_shielded_enemy, draw_spider_enemy,
    draw_voltage_enemy, draw_worm_enemy,
};
pub use towers::{
    draw_antivirus_tower, draw_chain_tower, draw_firewall_tower, draw_proxy_tower,
    draw_slowdown_tower,
};

/// Offset from the anchor to the centre of regular sprites.
pub const SMALL_ANCHOR_OFFSET: f32 = 15.0;

/// Offset from the anchor to the centre of the spider sprite.
pub const LARGE_ANCHOR_OFFSET: f32 = 25.0;

/// Paints the sprite for `kind` with its anchor at `position`.
pub fn draw_tower(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    kind: TowerKind,
    position: Vec2,
    state: TowerVisualState,
) {
    match kind {
        TowerKind::Firewall => {
            draw_firewall_tower(surface, frame, position, state.health, state.max_health)
        }
        TowerKind::Antivirus => draw_antivirus_tower(surface, frame, position),
        TowerKind::Proxy => draw_proxy_tower(surface, frame, position),
        TowerKind::Slowdown => draw_slowdown_tower(surface, frame, position),
        TowerKind::Chain => draw_chain_tower(surface, frame, position),
    }
}

/// Paints the sprite for `kind` with its anchor at `position`.
pub fn draw_enemy(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    kind: EnemyKind,
    position: Vec2,
    state: EnemyVisualState,
) {
    match kind {
        EnemyKind::Hacker => draw_hacker_enemy(surface, frame, position),
        EnemyKind::Ddos => draw_ddos_enemy(surface, frame, position),
        EnemyKind::Malware => draw_malware_enemy(surface, frame, position),
        EnemyKind::Spider => draw_spider_enemy(surface, frame, position),
        EnemyKind::Shielded => {
            draw_shielded_enemy(surface, frame, position, state.shield, state.max_shield)
        }
        EnemyKind::Voltage => draw_voltage_enemy(surface, frame, position),
        EnemyKind::Replicator => {
            draw_replicator_enemy(surface, frame, position, state.is_original)
        }
        EnemyKind::Phoenix => draw_phoenix_enemy(surface, frame, position, state.is_reviving),
        EnemyKind::Worm => draw_worm_enemy(surface, frame, position),
        EnemyKind::PortalMiner => draw_portal_miner_enemy(surface, frame, position),
    }
}

/// Ground shadow painted beneath a sprite.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Shadow {
    offset_y: f32,
    radii: Vec2,
    alpha: f32,
}

impl Shadow {
    pub(crate) const SMALL: Shadow = Shadow::new(12.0, 12.0, 4.0, 0.3);

    pub(crate) const fn new(offset_y: f32, radius_x: f32, radius_y: f32, alpha: f32) -> Self {
        Self {
            offset_y,
            radii: Vec2::new(radius_x, radius_y),
            alpha,
        }
    }
}

/// Layered paint template shared by every sprite.
pub(crate) trait SpriteLayers {
    fn anchor_offset(&self) -> f32 {
        SMALL_ANCHOR_OFFSET
    }

    fn shadow(&self) -> Shadow {
        Shadow::SMALL
    }

    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>);

    fn ornament(&self, _ctx: &mut SpriteContext<'_, '_, '_>) {}

    fn animate(&self, _ctx: &mut SpriteContext<'_, '_, '_>) {}

    fn overlay(&self, _ctx: &mut SpriteContext<'_, '_, '_>) {}
}

pub(crate) fn paint_sprite(
    sprite: &impl SpriteLayers,
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
) {
    let mut ctx = SpriteContext {
        surface,
        frame,
        center: position + Vec2::splat(sprite.anchor_offset()),
    };

    let shadow = sprite.shadow();
    ctx.ellipse(
        0.0,
        shadow.offset_y,
        shadow.radii.x,
        shadow.radii.y,
        Color::BLACK.with_alpha(shadow.alpha),
    );
    sprite.body(&mut ctx);
    sprite.ornament(&mut ctx);
    sprite.animate(&mut ctx);
    sprite.overlay(&mut ctx);
}

/// Surface, clock and centre of the sprite being painted.
///
/// Shape helpers take coordinates relative to the sprite centre.
pub(crate) struct SpriteContext<'s, 'f, 'r> {
    surface: &'s mut dyn DrawSurface,
    frame: &'f mut Frame<'r>,
    center: Vec2,
}

impl SpriteContext<'_, '_, '_> {
    pub(crate) fn center(&self) -> Vec2 {
        self.center
    }

    pub(crate) fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut *self.surface
    }

    pub(crate) fn phase(&self, frequency: f64) -> f32 {
        self.frame.phase(frequency)
    }

    pub(crate) fn wave(&self, frequency: f64) -> f32 {
        self.frame.wave(frequency)
    }

    pub(crate) fn jitter(&mut self, amplitude: f32) -> f32 {
        self.frame.jitter(amplitude)
    }

    pub(crate) fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.surface.fill_rect(
            self.center + Vec2::new(x, y),
            Vec2::new(width, height),
            color,
        );
    }

    pub(crate) fn circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.surface
            .fill_circle(self.center + Vec2::new(x, y), radius, color);
    }

    pub(crate) fn ellipse(&mut self, x: f32, y: f32, radius_x: f32, radius_y: f32, color: Color) {
        self.surface.fill_ellipse(
            self.center + Vec2::new(x, y),
            Vec2::new(radius_x, radius_y),
            color,
        );
    }

    pub(crate) fn polygon(&mut self, points: &[Vec2], color: Color) {
        let absolute: Vec<Vec2> = points.iter().map(|point| self.center + *point).collect();
        self.surface.fill_polygon(&absolute, color);
    }

    pub(crate) fn polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let absolute: Vec<Vec2> = points.iter().map(|point| self.center + *point).collect();
        self.surface.stroke_polyline(&absolute, stroke);
    }

    pub(crate) fn ring(&mut self, x: f32, y: f32, radius: f32, stroke: Stroke) {
        self.surface
            .stroke_circle(self.center + Vec2::new(x, y), radius, stroke);
    }

    pub(crate) fn arc(&mut self, radius: f32, start_angle: f32, end_angle: f32, stroke: Stroke) {
        self.surface
            .stroke_arc(self.center, radius, start_angle, end_angle, stroke);
    }
}
