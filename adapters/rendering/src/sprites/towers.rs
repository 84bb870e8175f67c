use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;
use proxy_defense_core::TowerVisualState;

use super::{paint_sprite, SpriteContext, SpriteLayers};
use crate::{Color, DrawSurface, Frame, Stroke};

const BRICK: Color = Color::from_rgb_u8(178, 34, 34);
const MORTAR: Color = Color::from_rgb_u8(90, 20, 20);
const FLAME: Color = Color::from_rgb_u8(255, 140, 0);
const FLAME_CORE: Color = Color::from_rgb_u8(255, 220, 80);
const ENERGY_SHIELD: Color = Color::new(0.3, 0.6, 1.0, 1.0);

const ANTIVIRUS_GREEN: Color = Color::from_rgb_u8(34, 139, 34);
const ANTIVIRUS_LIGHT: Color = Color::from_rgb_u8(144, 238, 144);

const PROXY_BASE: Color = Color::from_rgb_u8(70, 90, 120);
const PROXY_MAST: Color = Color::from_rgb_u8(100, 120, 160);
const PROXY_BLUE: Color = Color::from_rgb_u8(30, 144, 255);
const PROXY_NODE: Color = Color::from_rgb_u8(135, 206, 250);

const HOURGLASS_GLASS: Color = Color::new(0.0, 0.75, 1.0, 0.8);
const HOURGLASS_FRAME: Color = Color::from_rgb_u8(139, 90, 43);
const SAND: Color = Color::from_rgb_u8(238, 214, 175);
const FROST: Color = Color::from_rgb_u8(173, 216, 230);

const COIL_BASE: Color = Color::from_rgb_u8(60, 60, 70);
const COIL_POLE: Color = Color::from_rgb_u8(128, 128, 140);
const COPPER: Color = Color::from_rgb_u8(184, 115, 51);
const CHAIN_ORB: Color = Color::from_rgb_u8(148, 0, 211);
const CHAIN_SPARK: Color = Color::from_rgb_u8(221, 160, 255);

/// Paints a firewall tower. The energy shield shows while health stays above 70 %.
pub fn draw_firewall_tower(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    position: Vec2,
    health: f32,
    max_health: f32,
) {
    let sprite = Firewall {
        state: TowerVisualState::new(health, max_health),
    };
    paint_sprite(&sprite, surface, frame, position);
}

/// Paints an antivirus tower.
pub fn draw_antivirus_tower(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Antivirus, surface, frame, position);
}

/// Paints a proxy tower.
pub fn draw_proxy_tower(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Proxy, surface, frame, position);
}

/// Paints a slowdown tower.
pub fn draw_slowdown_tower(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Slowdown, surface, frame, position);
}

/// Paints a chain tower.
pub fn draw_chain_tower(surface: &mut dyn DrawSurface, frame: &mut Frame<'_>, position: Vec2) {
    paint_sprite(&Chain, surface, frame, position);
}

struct Firewall {
    state: TowerVisualState,
}

impl SpriteLayers for Firewall {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-12.0, -8.0, 24.0, 20.0, MORTAR);
        for row in 0..4 {
            let y = -7.0 + row as f32 * 5.0;
            let stagger = if row % 2 == 0 { 0.0 } else { 3.0 };
            for column in 0..4 {
                let x = -11.0 + stagger + column as f32 * 6.0;
                if x + 5.0 <= 12.0 {
                    ctx.rect(x, y, 5.0, 4.0, BRICK);
                }
            }
        }
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for crenel in 0..3 {
            ctx.rect(-12.0 + crenel as f32 * 9.0, -12.0, 6.0, 4.0, BRICK);
        }
        ctx.rect(-3.0, 6.0, 6.0, 6.0, MORTAR.lighten(0.1));
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for (index, x) in [-9.0_f32, 0.0, 9.0].into_iter().enumerate() {
            let offset = index as f32 * 1.3;
            let height = 6.0 + 2.0 * (ctx.phase(0.01) + offset).sin();
            let alpha = 0.7 + 0.3 * (ctx.phase(0.02) + offset).sin();
            ctx.rect(x - 2.0, -12.0 - height, 4.0, height, FLAME.with_alpha(alpha));
            ctx.rect(
                x - 1.0,
                -12.0 - height * 0.6,
                2.0,
                height * 0.6,
                FLAME_CORE.with_alpha(alpha),
            );
        }
    }

    fn overlay(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        if self.state.projects_shield() {
            let alpha = 0.15 + 0.1 * ctx.wave(0.005);
            ctx.circle(0.0, 0.0, 18.0, ENERGY_SHIELD.with_alpha(alpha));
        }
    }
}

struct Antivirus;

impl SpriteLayers for Antivirus {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let outline = [
            Vec2::new(-11.0, -12.0),
            Vec2::new(11.0, -12.0),
            Vec2::new(11.0, 2.0),
            Vec2::new(0.0, 13.0),
            Vec2::new(-11.0, 2.0),
        ];
        ctx.polygon(&outline, ANTIVIRUS_GREEN);
        let inner: Vec<Vec2> = outline.iter().map(|point| *point * 0.7).collect();
        ctx.polygon(&inner, ANTIVIRUS_GREEN.lighten(0.25));
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-2.0, -8.0, 4.0, 14.0, Color::WHITE);
        ctx.rect(-6.0, -3.0, 12.0, 4.0, Color::WHITE);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let sweep = ctx.phase(0.004) / TAU;
        ctx.rect(
            -11.0,
            -12.0 + sweep * 24.0,
            22.0,
            1.5,
            ANTIVIRUS_LIGHT.with_alpha(0.6),
        );

        let radius = 15.0 + 1.5 * ctx.wave(0.004);
        let alpha = 0.3 + 0.2 * ctx.wave(0.01);
        ctx.ring(
            0.0,
            0.0,
            radius,
            Stroke::new(ANTIVIRUS_GREEN.with_alpha(alpha), 1.0),
        );
    }
}

struct Proxy;

impl SpriteLayers for Proxy {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-10.0, 2.0, 20.0, 10.0, PROXY_BASE);
        ctx.rect(-2.0, -10.0, 4.0, 12.0, PROXY_MAST);
        ctx.polygon(
            &[
                Vec2::new(-8.0, -12.0),
                Vec2::new(8.0, -12.0),
                Vec2::new(4.0, -8.0),
                Vec2::new(-4.0, -8.0),
            ],
            PROXY_BLUE,
        );
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let lights = [
            Color::from_rgb_u8(50, 205, 50),
            Color::from_rgb_u8(255, 215, 0),
            Color::from_rgb_u8(220, 20, 60),
        ];
        for (index, light) in lights.into_iter().enumerate() {
            ctx.rect(-7.0 + index as f32 * 5.0, 5.0, 3.0, 3.0, light);
        }
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        for node in 0..3 {
            let angle = ctx.phase(0.003) + node as f32 * TAU / 3.0;
            ctx.circle(angle.cos() * 13.0, angle.sin() * 13.0 - 2.0, 2.0, PROXY_NODE);
        }

        let pulse = ctx.phase(0.005) / TAU;
        ctx.arc(
            14.0 + 4.0 * pulse,
            -3.0 * FRAC_PI_4,
            -FRAC_PI_4,
            Stroke::new(PROXY_BLUE.with_alpha(1.0 - pulse), 1.5),
        );
    }
}

struct Slowdown;

impl SpriteLayers for Slowdown {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.polygon(
            &[
                Vec2::new(-9.0, -11.0),
                Vec2::new(9.0, -11.0),
                Vec2::new(0.0, 0.0),
            ],
            HOURGLASS_GLASS,
        );
        ctx.polygon(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(9.0, 11.0),
                Vec2::new(-9.0, 11.0),
            ],
            HOURGLASS_GLASS,
        );
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-11.0, -13.0, 22.0, 2.0, HOURGLASS_FRAME);
        ctx.rect(-11.0, 11.0, 22.0, 2.0, HOURGLASS_FRAME);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let fall = ctx.phase(0.006) / TAU;
        ctx.rect(-0.5, -2.0 + fall * 10.0, 1.0, 2.0, SAND);

        let radius = 16.0 + 2.0 * ctx.wave(0.003);
        ctx.ring(0.0, 0.0, radius, Stroke::new(FROST.with_alpha(0.4), 1.0));

        for flake in 0..4 {
            let angle = ctx.phase(0.002) + flake as f32 * TAU / 4.0;
            ctx.rect(
                angle.cos() * 14.0 - 1.0,
                angle.sin() * 14.0 - 1.0,
                2.0,
                2.0,
                Color::WHITE.with_alpha(0.8),
            );
        }
    }
}

struct Chain;

const ORB_Y: f32 = -13.0;

impl SpriteLayers for Chain {
    fn body(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.rect(-8.0, 4.0, 16.0, 8.0, COIL_BASE);
        ctx.rect(-1.5, -12.0, 3.0, 16.0, COIL_POLE);
        for ring in 0..4 {
            ctx.rect(-6.0, 2.0 - ring as f32 * 4.0, 12.0, 2.0, COPPER);
        }
    }

    fn ornament(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        ctx.circle(0.0, ORB_Y, 4.0, CHAIN_ORB);
    }

    fn animate(&self, ctx: &mut SpriteContext<'_, '_, '_>) {
        let glow = 6.0 + ctx.wave(0.01);
        ctx.circle(0.0, ORB_Y, glow, CHAIN_ORB.with_alpha(0.3));

        let orb = Vec2::new(0.0, ORB_Y);
        for spark in 0..3 {
            let direction = Vec2::from_angle(ctx.phase(0.004) + spark as f32 * TAU / 3.0);
            let kink = direction.perp() * ctx.jitter(2.0);
            let points = [orb, orb + direction * 4.5 + kink, orb + direction * 9.0];
            ctx.polyline(&points, Stroke::new(CHAIN_SPARK.with_alpha(0.8), 1.0));
        }
    }
}
