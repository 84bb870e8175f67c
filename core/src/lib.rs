#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Proxy Defense renderer.
//!
//! This crate names the entities a game loop can ask the renderer to paint.
//! Kinds are plain tags: they carry no geometry of their own, the rendering
//! crate maps each tag to a fixed palette and shape. Per-entity state that
//! gates decorative overlays travels alongside the tag as a small value type.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical title shown by adapters that open a window.
pub const WINDOW_TITLE: &str = "Proxy Defense";

/// Fraction of maximum health above which a firewall projects its energy shield.
pub const FIREWALL_SHIELD_THRESHOLD: f32 = 0.7;

/// Tower variants that can be placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerKind {
    /// Brick wall tower topped with flickering flames.
    Firewall,
    /// Shield-shaped tower emitting a scanning cross.
    Antivirus,
    /// Relay tower routing traffic through orbiting nodes.
    Proxy,
    /// Hourglass tower that slows enemies with a frost aura.
    Slowdown,
    /// Coil tower arcing electricity between targets.
    Chain,
}

impl TowerKind {
    /// Every tower kind in presentation order.
    pub const ALL: [TowerKind; 5] = [
        TowerKind::Firewall,
        TowerKind::Antivirus,
        TowerKind::Proxy,
        TowerKind::Slowdown,
        TowerKind::Chain,
    ];

    /// Lowercase tag used by configuration files and game loops.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            TowerKind::Firewall => "firewall",
            TowerKind::Antivirus => "antivirus",
            TowerKind::Proxy => "proxy",
            TowerKind::Slowdown => "slowdown",
            TowerKind::Chain => "chain",
        }
    }
}

impl fmt::Display for TowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TowerKind {
    type Err = ParseKindError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        TowerKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ParseKindError::UnknownTower {
                tag: tag.to_owned(),
            })
    }
}

/// Enemy variants that travel the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Hooded figure attacking with glitching green bolts.
    Hacker,
    /// Swarm cluster firing parallel bolts.
    Ddos,
    /// Pulsing virus blob attacking with an organic wave.
    Malware,
    /// Eight-legged crawler spitting web strands.
    Spider,
    /// Armoured unit protected by segmented shield arcs.
    Shielded,
    /// Charged orb crackling with sparks.
    Voltage,
    /// Cell that spawns translucent copies of itself.
    Replicator,
    /// Fire bird that revives after its first defeat.
    Phoenix,
    /// Segmented crawler streaming data packets.
    Worm,
    /// Drill unit tearing dimensional rifts.
    PortalMiner,
}

impl EnemyKind {
    /// Every enemy kind in presentation order.
    pub const ALL: [EnemyKind; 10] = [
        EnemyKind::Hacker,
        EnemyKind::Ddos,
        EnemyKind::Malware,
        EnemyKind::Spider,
        EnemyKind::Shielded,
        EnemyKind::Voltage,
        EnemyKind::Replicator,
        EnemyKind::Phoenix,
        EnemyKind::Worm,
        EnemyKind::PortalMiner,
    ];

    /// Lowercase tag used by configuration files and game loops.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            EnemyKind::Hacker => "hacker",
            EnemyKind::Ddos => "ddos",
            EnemyKind::Malware => "malware",
            EnemyKind::Spider => "spider",
            EnemyKind::Shielded => "shielded",
            EnemyKind::Voltage => "voltage",
            EnemyKind::Replicator => "replicator",
            EnemyKind::Phoenix => "phoenix",
            EnemyKind::Worm => "worm",
            EnemyKind::PortalMiner => "portal_miner",
        }
    }

    /// Reports whether the enemy fires a visible attack effect.
    #[must_use]
    pub const fn has_attack_effect(self) -> bool {
        matches!(
            self,
            EnemyKind::Hacker
                | EnemyKind::Ddos
                | EnemyKind::Malware
                | EnemyKind::Spider
                | EnemyKind::Phoenix
                | EnemyKind::Worm
                | EnemyKind::PortalMiner
        )
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EnemyKind {
    type Err = ParseKindError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        EnemyKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ParseKindError::UnknownEnemy {
                tag: tag.to_owned(),
            })
    }
}

/// Errors reported when a textual kind tag cannot be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseKindError {
    /// The tag does not name any tower kind.
    #[error("unknown tower kind `{tag}`")]
    UnknownTower {
        /// Tag that failed to resolve.
        tag: String,
    },
    /// The tag does not name any enemy kind.
    #[error("unknown enemy kind `{tag}`")]
    UnknownEnemy {
        /// Tag that failed to resolve.
        tag: String,
    },
}

/// Optional tower state that gates conditional overlays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TowerVisualState {
    /// Remaining structural health.
    pub health: f32,
    /// Health the tower was built with.
    pub max_health: f32,
}

impl TowerVisualState {
    /// Creates a tower state with the provided health values.
    #[must_use]
    pub const fn new(health: f32, max_health: f32) -> Self {
        Self { health, max_health }
    }

    /// Reports whether the firewall energy shield should be drawn.
    ///
    /// The comparison is strict: a tower at exactly the threshold has no shield.
    #[must_use]
    pub fn projects_shield(&self) -> bool {
        self.health > FIREWALL_SHIELD_THRESHOLD * self.max_health
    }
}

impl Default for TowerVisualState {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Optional enemy state that gates conditional overlays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyVisualState {
    /// Remaining shield points.
    pub shield: f32,
    /// Shield points the enemy spawned with.
    pub max_shield: f32,
    /// Whether a replicator is the original rather than a spawned copy.
    pub is_original: bool,
    /// Whether a phoenix is currently rising from its ashes.
    pub is_reviving: bool,
}

impl EnemyVisualState {
    /// Creates a state carrying shield values and default flags.
    #[must_use]
    pub fn shielded(shield: f32, max_shield: f32) -> Self {
        Self {
            shield,
            max_shield,
            ..Self::default()
        }
    }

    /// Creates a state describing a cloned replicator.
    #[must_use]
    pub fn clone_copy() -> Self {
        Self {
            is_original: false,
            ..Self::default()
        }
    }

    /// Creates a state describing a reviving phoenix.
    #[must_use]
    pub fn reviving() -> Self {
        Self {
            is_reviving: true,
            ..Self::default()
        }
    }
}

impl Default for EnemyVisualState {
    fn default() -> Self {
        Self {
            shield: 0.0,
            max_shield: 0.0,
            is_original: true,
            is_reviving: false,
        }
    }
}
