//! Strongly typed agent identifier.
//!
//! Agents have no state of their own: an `AgentId` only ever exists as the
//! occupant value stored on a city.  IDs are assigned sequentially from 1 at
//! deployment time, so `AgentId(0)` never names a live agent.

use std::fmt;

/// Identifier of one deployed alien.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The first ID handed out by deployment.
    pub const FIRST: AgentId = AgentId(1);

    /// The ID following `self` in deployment order.
    #[inline(always)]
    pub fn next(self) -> AgentId {
        AgentId(self.0 + 1)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AgentId> for u32 {
    #[inline(always)]
    fn from(id: AgentId) -> u32 {
        id.0
    }
}
