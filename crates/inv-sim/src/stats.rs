//! End-of-run statistics.

use std::fmt;

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The tick budget ran out with at least one city standing.
    BudgetExhausted,
    /// No city is left.
    AllDestroyed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::BudgetExhausted => "budget_exhausted",
            Outcome::AllDestroyed    => "all_destroyed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimStats {
    /// Last iteration reached (0 if the run ended during deployment).
    pub iterations: u64,
    /// Every move-into, placements during deployment included.
    pub moves:      u64,
    /// Aliens actually deployed.
    pub deployed:   u32,
    /// City count right after loading.
    pub max_cities: usize,
    /// Cities still standing.
    pub remaining:  usize,
    pub outcome:    Outcome,
}

impl SimStats {
    pub fn destroyed(&self) -> usize {
        self.max_cities.saturating_sub(self.remaining)
    }

    /// `"city was"` for exactly one destroyed city, `"cities were"` otherwise.
    pub fn cities_phrase(&self) -> &'static str {
        if self.destroyed() == 1 { "city was" } else { "cities were" }
    }
}

impl fmt::Display for SimStats {
    /// `"3 cities were destroyed out of 5, 2 remained"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} destroyed out of {}, {} remained",
            self.destroyed(),
            self.cities_phrase(),
            self.max_cities,
            self.remaining,
        )
    }
}
