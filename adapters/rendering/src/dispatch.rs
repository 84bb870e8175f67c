//! Routes an enemy kind to its attack effect.

use glam::Vec2;
use proxy_defense_core::EnemyKind;

use crate::{
    attacks::{
        draw_ddos_attack, draw_hacker_attack, draw_malware_attack, draw_phoenix_attack,
        draw_portal_miner_attack, draw_spider_attack, draw_worm_attack,
    },
    DrawSurface, Frame,
};

/// Paints the attack effect of `kind`. Kinds without an attack effect paint nothing.
pub fn draw_enemy_attack(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
    kind: EnemyKind,
) {
    match kind {
        EnemyKind::Hacker => draw_hacker_attack(surface, frame, from, to, progress),
        EnemyKind::Ddos => draw_ddos_attack(surface, frame, from, to, progress),
        EnemyKind::Malware => draw_malware_attack(surface, frame, from, to, progress),
        EnemyKind::Spider => draw_spider_attack(surface, frame, from, to, progress),
        EnemyKind::Phoenix => draw_phoenix_attack(surface, frame, from, to, progress),
        EnemyKind::Worm => draw_worm_attack(surface, frame, from, to, progress),
        EnemyKind::PortalMiner => draw_portal_miner_attack(surface, frame, from, to, progress),
        EnemyKind::Shielded | EnemyKind::Voltage | EnemyKind::Replicator => {}
    }
}

/// Paints the attack effect named by a string tag such as `"portal_miner"`.
///
/// Unknown tags paint nothing; hosts feeding tags from data files should not
/// crash on a typo.
pub fn draw_enemy_attack_tag(
    surface: &mut dyn DrawSurface,
    frame: &mut Frame<'_>,
    from: Vec2,
    to: Vec2,
    progress: f32,
    tag: &str,
) {
    match tag.parse::<EnemyKind>() {
        Ok(kind) => draw_enemy_attack(surface, frame, from, to, progress, kind),
        Err(error) => log::trace!("skipping attack effect: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{recording::RecordingSurface, SequenceRandom};

    const FROM: Vec2 = Vec2::new(0.0, 0.0);
    const TO: Vec2 = Vec2::new(80.0, 40.0);

    fn record_kind(kind: EnemyKind, progress: f32) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::new(vec![0.2, 0.8, 0.5]);
        let mut frame = Frame::new(2_000.0, &mut random);
        draw_enemy_attack(&mut surface, &mut frame, FROM, TO, progress, kind);
        surface
    }

    #[test]
    fn routes_worm_to_the_worm_effect() {
        let routed = record_kind(EnemyKind::Worm, 0.8);

        let mut direct = RecordingSurface::new();
        let mut random = SequenceRandom::new(vec![0.2, 0.8, 0.5]);
        let mut frame = Frame::new(2_000.0, &mut random);
        draw_worm_attack(&mut direct, &mut frame, FROM, TO, 0.8);

        assert_eq!(routed, direct);
    }

    #[test]
    fn every_attacking_kind_paints() {
        for kind in EnemyKind::ALL {
            let surface = record_kind(kind, 0.5);
            assert_eq!(
                surface.paint_count() > 0,
                kind.has_attack_effect(),
                "{kind} routed incorrectly"
            );
        }
    }

    #[test]
    fn tags_route_like_kinds() {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::new(vec![0.2, 0.8, 0.5]);
        let mut frame = Frame::new(2_000.0, &mut random);
        draw_enemy_attack_tag(&mut surface, &mut frame, FROM, TO, 0.8, "portal_miner");

        assert_eq!(surface, record_kind(EnemyKind::PortalMiner, 0.8));
    }

    #[test]
    fn unknown_tags_paint_nothing() {
        let mut surface = RecordingSurface::new();
        let mut random = SequenceRandom::constant(0.5);
        let mut frame = Frame::new(0.0, &mut random);
        draw_enemy_attack_tag(&mut surface, &mut frame, FROM, TO, 0.5, "dragon");
        draw_enemy_attack_tag(&mut surface, &mut frame, FROM, TO, 0.5, "");

        assert!(surface.ops().is_empty());
        assert_eq!(random.draws(), 0);
    }
}
