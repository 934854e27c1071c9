//! The city graph.
//!
//! # Invariants
//!
//! - **Name uniqueness**: each name maps to exactly one [`City`].
//! - **Road symmetry**: if `A` has a road in direction `d` to `B`, then `B`
//!   exists and has a road in `d.opposite()` back to `A`.  Checked once by
//!   [`Graph::validate`] at load time; [`Graph::destroy`] preserves it by
//!   removing the matching back-roads together with the city.
//! - **No loops**: a road never leads back to its own city, so an alien can
//!   never collide with itself.
//!
//! # Iteration order
//!
//! Cities are stored in a `BTreeMap`, so [`Graph::city_names`] and
//! [`Graph::name_at`] follow name order.  Given the same random source, a run
//! over the same map always visits cities in the same sequence.

use std::collections::BTreeMap;

use inv_core::{AgentId, Direction};

use crate::{City, MapError, MapResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    cities: BTreeMap<String, City>,
}

impl Graph {
    pub fn new() -> Self {
        Self { cities: BTreeMap::new() }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add `city`, rejecting it (and handing it back) if the name is taken.
    pub fn add_city(&mut self, city: City) -> Result<(), City> {
        if self.cities.contains_key(&city.name) {
            return Err(city);
        }
        self.cities.insert(city.name.clone(), city);
        Ok(())
    }

    /// Check the road-symmetry invariant over every road of every city.
    ///
    /// Returns the first violation found in name order.
    pub fn validate(&self) -> MapResult<()> {
        for city in self.cities.values() {
            for (direction, to) in city.roads() {
                if to == city.name {
                    return Err(MapError::SelfRoad { name: city.name.clone(), direction });
                }
                let Some(neighbor) = self.cities.get(to) else {
                    return Err(MapError::DanglingRoad {
                        from: city.name.clone(),
                        to:   to.to_owned(),
                        direction,
                    });
                };
                let back = neighbor.road(direction.opposite());
                if back != Some(city.name.as_str()) {
                    return Err(MapError::MissingBackRoad {
                        from:  city.name.clone(),
                        to:    to.to_owned(),
                        direction,
                        found: back.map(str::to_owned),
                    });
                }
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    /// All current city names, in name order.
    ///
    /// Destruction can happen at any point in a tick, so callers re-read this
    /// whenever they need the current set rather than caching it.
    pub fn city_names(&self) -> Vec<String> {
        self.cities.keys().cloned().collect()
    }

    /// The `index`-th city name in name order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.cities.keys().nth(index).map(String::as_str)
    }

    /// Directions with an outgoing road from `name`, in canonical order.
    /// Empty if the city does not exist.
    pub fn roads_of(&self, name: &str) -> Vec<Direction> {
        self.cities.get(name).map(City::directions).unwrap_or_default()
    }

    /// Cities in name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    /// `(city, agent)` for every occupied city, in name order.
    pub fn occupants(&self) -> impl Iterator<Item = (&str, AgentId)> + '_ {
        self.cities
            .values()
            .filter_map(|c| c.occupant.map(|a| (c.name.as_str(), a)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cities.values().filter(|c| c.occupant.is_some()).count()
    }

    /// Total number of directed roads.
    pub fn road_count(&self) -> usize {
        self.cities.values().map(City::road_count).sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove `name` and every back-road pointing at it.
    ///
    /// For each outgoing road `d → B`, the road `d.opposite()` on `B` is
    /// removed if it leads to `name`; no other road is touched.  Returns the
    /// removed city (with its occupant), or `None` if it did not exist.
    pub fn destroy(&mut self, name: &str) -> Option<City> {
        let city = self.cities.remove(name)?;
        for (direction, to) in city.roads() {
            if let Some(neighbor) = self.cities.get_mut(to) {
                let back = &mut neighbor.roads[direction.opposite().index()];
                if back.as_deref() == Some(name) {
                    *back = None;
                }
            }
        }
        Some(city)
    }
}
