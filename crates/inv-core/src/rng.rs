//! Random sources for deployment and road selection.
//!
//! # Determinism strategy
//!
//! The simulation draws exactly two kinds of random numbers:
//!
//! - a city index when deploying each agent, and
//! - a road index when moving each agent during a tick.
//!
//! Both go through [`RandomSource::pick`], so a run is fully determined by the
//! source's state.  Production runs use [`SimRng`] seeded once at start-up;
//! tests substitute [`ScriptedRng`] to force specific choices.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the simulation never shares it.
#[derive(Debug)]
pub struct SimRng {
    seed:  u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, inner: SmallRng::seed_from_u64(seed) }
    }

    /// The seed this generator was created with, for reproducing a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty range");
        self.inner.gen_range(0..len)
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// Replays a fixed sequence of indices.
///
/// Each call to `pick(len)` takes the next scripted value modulo `len`; the
/// script wraps around when exhausted.  An empty script always picks 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always pick the first candidate.
    pub fn first() -> Self {
        Self::default()
    }

    /// Number of picks served so far.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty range");
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len
    }
}
