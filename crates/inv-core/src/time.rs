//! Iteration counter and run configuration.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Tick budget used when the caller does not set one.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

// ── Iteration ─────────────────────────────────────────────────────────────────

/// The simulation iteration counter.
///
/// Iteration 0 is deployment; ticks run from iteration 1 upwards.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u64);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }
}

impl fmt::Display for Iteration {
    /// Renders as the five-wide log prefix `[iter     7]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[iter {:>5}]", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of aliens to deploy.
    pub agents: u32,

    /// Tick budget.  The run stops after this many ticks even if cities remain.
    pub iterations: u64,

    /// RNG seed.  `None` seeds from the wall clock at start-up.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn new(agents: u32) -> Self {
        Self { agents, iterations: DEFAULT_ITERATIONS, seed: None }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or one taken from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
