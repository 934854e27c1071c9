//! Facts reported to observers.

use inv_core::{AgentId, Iteration};

/// Two aliens met and destroyed a city.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestructionEvent {
    pub iteration: Iteration,
    pub city:      String,
    /// The alien already in the city, then the one arriving.
    pub aliens:    [AgentId; 2],
}

/// Counts for one completed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    /// Aliens that moved into an empty city.
    pub moved:     usize,
    /// Cities destroyed by arrivals this tick.
    pub destroyed: usize,
    /// Aliens left in place because their city has no roads.
    pub stranded:  usize,
    /// Cities remaining after the tick.
    pub cities:    usize,
    /// Occupied cities after the tick.
    pub occupied:  usize,
}
