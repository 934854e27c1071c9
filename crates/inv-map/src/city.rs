//! A single city node.

use inv_core::{AgentId, Direction};

/// A named node with at most one road per direction and at most one alien.
///
/// `roads` is indexed by [`Direction::index`]; a slot is `Some(name)` only if
/// a road leads that way.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub name:     String,
    pub roads:    [Option<String>; 4],
    pub occupant: Option<AgentId>,
}

impl City {
    /// An empty city with no roads.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            roads:    Default::default(),
            occupant: None,
        }
    }

    /// Builder-style road insertion, handy for hand-built graphs.
    pub fn with_road(mut self, direction: Direction, neighbor: impl Into<String>) -> Self {
        self.roads[direction.index()] = Some(neighbor.into());
        self
    }

    /// Neighbor reachable in `direction`, if a road exists.
    #[inline]
    pub fn road(&self, direction: Direction) -> Option<&str> {
        self.roads[direction.index()].as_deref()
    }

    /// Directions with an outgoing road, in canonical order.
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.roads[d.index()].is_some())
            .collect()
    }

    /// Neighbor names reachable from here, in canonical direction order.
    pub fn targets(&self) -> Vec<&str> {
        self.roads.iter().filter_map(|r| r.as_deref()).collect()
    }

    /// Iterator over `(direction, neighbor)` pairs in canonical order.
    pub fn roads(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.road(d).map(|to| (d, to)))
    }

    pub fn road_count(&self) -> usize {
        self.roads.iter().filter(|r| r.is_some()).count()
    }

    /// `true` if an occupant could never leave (no outgoing roads).
    pub fn is_dead_end(&self) -> bool {
        self.road_count() == 0
    }
}
