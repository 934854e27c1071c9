//! Plain data row types written by output backends.

/// One destroyed city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructionRow {
    pub iteration:    u64,
    pub city:         String,
    /// The alien that was already in the city.
    pub first_alien:  u32,
    /// The alien that arrived.
    pub second_alien: u32,
}

/// End-of-run totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub iterations: u64,
    pub outcome:    &'static str,
    pub moves:      u64,
    pub max_cities: u64,
    pub destroyed:  u64,
    pub remaining:  u64,
}
