//! Simulation observer trait — the log sink for everything the core reports.

use inv_core::{AgentId, Iteration};
use inv_map::Graph;

use crate::{DestructionEvent, SimStats, TickSummary};

/// Callbacks invoked by [`Sim`][crate::Sim] and
/// [`MovementEngine`][crate::MovementEngine] as the invasion unfolds.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Hooks marked *low priority* fire often and
/// carry debugging detail; sinks usually filter them behind a verbosity flag.
///
/// # Example — destruction counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_city_destroyed(&mut self, _event: &DestructionEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Deployment of `agents` aliens is about to begin.
    fn on_deploy_start(&mut self, _iteration: Iteration, _agents: u32) {}

    /// *Low priority.*  `agent` moved into the empty city `city`.
    fn on_agent_placed(&mut self, _iteration: Iteration, _agent: AgentId, _city: &str) {}

    /// *Low priority.*  Deployment finished; `graph` is the resulting world.
    fn on_deployed(&mut self, _iteration: Iteration, _graph: &Graph) {}

    /// Two aliens met and destroyed a city.
    fn on_city_destroyed(&mut self, _event: &DestructionEvent) {}

    /// *Low priority.*  A tick completed.
    fn on_tick_end(&mut self, _iteration: Iteration, _summary: &TickSummary) {}

    /// Every city is gone; the run stops early.
    fn on_all_destroyed(&mut self, _iteration: Iteration, _max_cities: usize) {}

    /// The tick budget ran out with cities still standing.
    fn on_budget_exhausted(&mut self, _iteration: Iteration) {}

    /// Called exactly once per run, whichever way it ended.
    fn on_sim_end(&mut self, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_deploy_start(&mut self, iteration: Iteration, agents: u32) {
        (**self).on_deploy_start(iteration, agents);
    }
    fn on_agent_placed(&mut self, iteration: Iteration, agent: AgentId, city: &str) {
        (**self).on_agent_placed(iteration, agent, city);
    }
    fn on_deployed(&mut self, iteration: Iteration, graph: &Graph) {
        (**self).on_deployed(iteration, graph);
    }
    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        (**self).on_city_destroyed(event);
    }
    fn on_tick_end(&mut self, iteration: Iteration, summary: &TickSummary) {
        (**self).on_tick_end(iteration, summary);
    }
    fn on_all_destroyed(&mut self, iteration: Iteration, max_cities: usize) {
        (**self).on_all_destroyed(iteration, max_cities);
    }
    fn on_budget_exhausted(&mut self, iteration: Iteration) {
        (**self).on_budget_exhausted(iteration);
    }
    fn on_sim_end(&mut self, stats: &SimStats) {
        (**self).on_sim_end(stats);
    }
}

/// An absent sink ignores every event; lets callers wire optional outputs.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_deploy_start(&mut self, iteration: Iteration, agents: u32) {
        if let Some(o) = self {
            o.on_deploy_start(iteration, agents);
        }
    }
    fn on_agent_placed(&mut self, iteration: Iteration, agent: AgentId, city: &str) {
        if let Some(o) = self {
            o.on_agent_placed(iteration, agent, city);
        }
    }
    fn on_deployed(&mut self, iteration: Iteration, graph: &Graph) {
        if let Some(o) = self {
            o.on_deployed(iteration, graph);
        }
    }
    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        if let Some(o) = self {
            o.on_city_destroyed(event);
        }
    }
    fn on_tick_end(&mut self, iteration: Iteration, summary: &TickSummary) {
        if let Some(o) = self {
            o.on_tick_end(iteration, summary);
        }
    }
    fn on_all_destroyed(&mut self, iteration: Iteration, max_cities: usize) {
        if let Some(o) = self {
            o.on_all_destroyed(iteration, max_cities);
        }
    }
    fn on_budget_exhausted(&mut self, iteration: Iteration) {
        if let Some(o) = self {
            o.on_budget_exhausted(iteration);
        }
    }
    fn on_sim_end(&mut self, stats: &SimStats) {
        if let Some(o) = self {
            o.on_sim_end(stats);
        }
    }
}

/// Fan out to two sinks, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_deploy_start(&mut self, iteration: Iteration, agents: u32) {
        self.0.on_deploy_start(iteration, agents);
        self.1.on_deploy_start(iteration, agents);
    }
    fn on_agent_placed(&mut self, iteration: Iteration, agent: AgentId, city: &str) {
        self.0.on_agent_placed(iteration, agent, city);
        self.1.on_agent_placed(iteration, agent, city);
    }
    fn on_deployed(&mut self, iteration: Iteration, graph: &Graph) {
        self.0.on_deployed(iteration, graph);
        self.1.on_deployed(iteration, graph);
    }
    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        self.0.on_city_destroyed(event);
        self.1.on_city_destroyed(event);
    }
    fn on_tick_end(&mut self, iteration: Iteration, summary: &TickSummary) {
        self.0.on_tick_end(iteration, summary);
        self.1.on_tick_end(iteration, summary);
    }
    fn on_all_destroyed(&mut self, iteration: Iteration, max_cities: usize) {
        self.0.on_all_destroyed(iteration, max_cities);
        self.1.on_all_destroyed(iteration, max_cities);
    }
    fn on_budget_exhausted(&mut self, iteration: Iteration) {
        self.0.on_budget_exhausted(iteration);
        self.1.on_budget_exhausted(iteration);
    }
    fn on_sim_end(&mut self, stats: &SimStats) {
        self.0.on_sim_end(stats);
        self.1.on_sim_end(stats);
    }
}
