//! Per-frame animation context: an explicit clock read and a jitter source.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed jitter in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next(&mut self) -> f32;
}

/// ChaCha-backed random source used by game loops.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Replays a fixed list of values, cycling once exhausted.
///
/// Values are clamped into `[0, 1)` so a replay can never push a drawer outside
/// the range a real generator would produce.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source cycling through `values`. An empty list behaves like `constant(0.5)`.
    #[must_use]
    pub fn new(values: Vec<f32>) -> Self {
        let values = if values.is_empty() { vec![0.5] } else { values };
        Self { values, cursor: 0 }
    }

    /// Creates a source that always yields `value`.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0 - f32::EPSILON)
        }
    }
}

/// Clock read and jitter source shared by every drawer called within one frame.
pub struct Frame<'r> {
    now_millis: f64,
    random: &'r mut dyn RandomSource,
}

impl<'r> Frame<'r> {
    /// Creates a frame context for the provided wall-clock time in milliseconds.
    pub fn new(now_millis: f64, random: &'r mut dyn RandomSource) -> Self {
        Self { now_millis, random }
    }

    /// Wall-clock time of the frame in milliseconds.
    #[must_use]
    pub fn now_millis(&self) -> f64 {
        self.now_millis
    }

    /// Angle `now * frequency` wrapped into `[0, TAU)`.
    ///
    /// Wrapping happens in double precision so long sessions keep smooth phases.
    #[must_use]
    pub fn phase(&self, frequency: f64) -> f32 {
        (self.now_millis * frequency).rem_euclid(TAU) as f32
    }

    /// `sin(now * frequency)`.
    #[must_use]
    pub fn wave(&self, frequency: f64) -> f32 {
        self.phase(frequency).sin()
    }

    /// Next jitter value in `[0, 1)`.
    pub fn random(&mut self) -> f32 {
        self.random.next()
    }

    /// Jitter value centred on zero in `[-amplitude, amplitude)`.
    pub fn jitter(&mut self, amplitude: f32) -> f32 {
        (self.random() - 0.5) * 2.0 * amplitude
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("now_millis", &self.now_millis)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_random_is_reproducible() {
        let mut first = SeededRandom::from_seed(42);
        let mut second = SeededRandom::from_seed(42);

        for _ in 0..16 {
            let value = first.next();
            assert_eq!(value, second.next());
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn sequence_random_cycles_and_clamps() {
        let mut random = SequenceRandom::new(vec![0.25, 2.0, -1.0]);

        assert_eq!(random.next(), 0.25);
        assert!(random.next() < 1.0);
        assert_eq!(random.next(), 0.0);
        assert_eq!(random.next(), 0.25);
        assert_eq!(random.draws(), 4);
    }

    #[test]
    fn empty_sequence_defaults_to_midpoint() {
        let mut random = SequenceRandom::new(Vec::new());

        assert_eq!(random.next(), 0.5);
    }

    #[test]
    fn phase_wraps_large_timestamps() {
        let mut random = SequenceRandom::constant(0.5);
        let frame = Frame::new(86_400_000.0 * 30.0, &mut random);
        let phase = frame.phase(0.01);

        assert!((0.0..std::f32::consts::TAU + 1e-4).contains(&phase));
        assert!(frame.wave(0.01).abs() <= 1.0);
    }

    #[test]
    fn jitter_is_centred_on_zero() {
        let mut random = SequenceRandom::new(vec![0.5, 0.0, 0.75]);
        let mut frame = Frame::new(0.0, &mut random);

        assert_eq!(frame.jitter(10.0), 0.0);
        assert_eq!(frame.jitter(10.0), -10.0);
        assert_eq!(frame.jitter(10.0), 5.0);
    }
}
