//! Deployment and movement: the only code that mutates the graph during a run.

use rustc_hash::FxHashSet;

use inv_core::{AgentId, Iteration, RandomSource};
use inv_map::Graph;

use crate::{DestructionEvent, SimObserver, TickSummary};

/// Result of moving an alien into a city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The city was empty; the alien now occupies it.
    Placed,
    /// The city was occupied; both aliens and the city are gone.
    Destroyed(DestructionEvent),
}

/// Owns the graph for the duration of a run and applies every placement,
/// move, and destruction to it.
///
/// The engine never fails: the graph was validated at load time and
/// [`Graph::destroy`] keeps roads symmetric, so every road target exists.
#[derive(Debug)]
pub struct MovementEngine {
    /// The world.  Aliens live only as `City::occupant` values.
    pub graph: Graph,

    /// Number of move-into operations applied so far.
    pub moves: u64,

    /// ID handed to the next deployed alien.
    next_agent: AgentId,
}

impl MovementEngine {
    pub fn new(graph: Graph) -> Self {
        Self { graph, moves: 0, next_agent: AgentId::FIRST }
    }

    /// Deploy `count` more aliens, each onto a uniformly random city.
    ///
    /// IDs continue from the previous call, starting at [`AgentId::FIRST`].
    ///
    /// The candidate set is re-read for every alien: an earlier alien in the
    /// same batch may already have destroyed a city, and a later one may land
    /// on an occupied city and destroy it.  Deployment stops early if no city
    /// is left.  Returns the number of aliens deployed.
    pub fn deploy<R, O>(
        &mut self,
        count:     u32,
        iteration: Iteration,
        rng:       &mut R,
        observer:  &mut O,
    ) -> u32
    where
        R: RandomSource,
        O: SimObserver,
    {
        let mut deployed = 0;
        for _ in 0..count {
            if self.graph.is_empty() {
                break;
            }
            let index = rng.pick(self.graph.len());
            let Some(target) = self.graph.name_at(index).map(str::to_owned) else {
                break;
            };
            let agent = self.next_agent;
            self.next_agent = agent.next();
            self.move_into(&target, agent, iteration, observer);
            deployed += 1;
        }
        deployed
    }

    /// Move `agent` into `city`.
    ///
    /// An empty city takes the alien in.  An occupied city is destroyed along
    /// with both aliens, and the destruction is reported to `observer`.
    /// Returns `None` only if `city` does not exist.
    pub fn move_into<O: SimObserver>(
        &mut self,
        city:      &str,
        agent:     AgentId,
        iteration: Iteration,
        observer:  &mut O,
    ) -> Option<MoveOutcome> {
        let target = self.graph.get_mut(city)?;
        self.moves += 1;

        let resident = target.occupant;
        match resident {
            None => {
                target.occupant = Some(agent);
                observer.on_agent_placed(iteration, agent, city);
                Some(MoveOutcome::Placed)
            }
            Some(resident) => {
                let event = self.destroy_city(city, resident, agent, iteration);
                observer.on_city_destroyed(&event);
                Some(MoveOutcome::Destroyed(event))
            }
        }
    }

    /// Advance every alien by one road.
    ///
    /// The set of cities is snapshotted once.  Within the tick a city is
    /// skipped if it was destroyed earlier in the tick, if an alien already
    /// moved into it this tick, if it is empty, or if it has no roads (its
    /// alien is stranded for good).  Otherwise its alien picks one road at
    /// random and leaves; the source city is vacated whether the arrival was
    /// a placement or a destruction.
    pub fn step<R, O>(&mut self, iteration: Iteration, rng: &mut R, observer: &mut O) -> TickSummary
    where
        R: RandomSource,
        O: SimObserver,
    {
        let snapshot = self.graph.city_names();
        let mut arrivals: FxHashSet<String> = FxHashSet::default();
        let mut summary = TickSummary::default();

        for name in &snapshot {
            if arrivals.contains(name) {
                continue;
            }
            let Some(city) = self.graph.get(name) else {
                continue;
            };
            let Some(agent) = city.occupant else {
                continue;
            };

            let target = {
                let targets = city.targets();
                if targets.is_empty() {
                    summary.stranded += 1;
                    continue;
                }
                targets[rng.pick(targets.len())].to_owned()
            };

            match self.move_into(&target, agent, iteration, observer) {
                Some(MoveOutcome::Placed)       => summary.moved += 1,
                Some(MoveOutcome::Destroyed(_)) => summary.destroyed += 1,
                None => {}
            }
            if let Some(source) = self.graph.get_mut(name) {
                source.occupant = None;
            }
            arrivals.insert(target);
        }

        summary.cities   = self.graph.len();
        summary.occupied = self.graph.occupied_count();
        summary
    }

    fn destroy_city(
        &mut self,
        city:      &str,
        resident:  AgentId,
        arriving:  AgentId,
        iteration: Iteration,
    ) -> DestructionEvent {
        self.graph.destroy(city);
        DestructionEvent {
            iteration,
            city:   city.to_owned(),
            aliens: [resident, arriving],
        }
    }
}
