//! `TracingObserver` — forwards simulation events to `tracing`.
//!
//! | Level   | Events                                                       |
//! |---------|--------------------------------------------------------------|
//! | `INFO`  | destructions, termination, final statistics                  |
//! | `DEBUG` | deployment start                                             |
//! | `TRACE` | individual placements, per-tick summaries, post-deploy map   |
//!
//! Every message starts with the `[iter NNNNN]` prefix of the iteration it
//! happened in.

use tracing::{debug, enabled, info, trace, Level};

use inv_core::{AgentId, Iteration};
use inv_map::{Graph, render};
use inv_sim::{DestructionEvent, SimObserver, SimStats, TickSummary};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SimObserver for TracingObserver {
    fn on_deploy_start(&mut self, iteration: Iteration, agents: u32) {
        debug!("{iteration} Deploying {agents} aliens into cities...");
    }

    fn on_agent_placed(&mut self, iteration: Iteration, agent: AgentId, city: &str) {
        trace!("{iteration} alien {agent} moved into {city}");
    }

    fn on_deployed(&mut self, iteration: Iteration, graph: &Graph) {
        // Skip rendering unless TRACE is on.
        if enabled!(Level::TRACE) {
            trace!(
                cities   = graph.len(),
                occupied = graph.occupied_count(),
                "{iteration} map after deployment:\n{}",
                render(graph).trim_end(),
            );
        }
    }

    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        info!(
            "{} {} has been destroyed by alien {} and alien {}",
            event.iteration, event.city, event.aliens[0], event.aliens[1],
        );
    }

    fn on_tick_end(&mut self, iteration: Iteration, summary: &TickSummary) {
        trace!(
            moved     = summary.moved,
            destroyed = summary.destroyed,
            stranded  = summary.stranded,
            cities    = summary.cities,
            occupied  = summary.occupied,
            "{iteration} tick complete",
        );
    }

    fn on_all_destroyed(&mut self, iteration: Iteration, max_cities: usize) {
        info!("{iteration} all cities ({max_cities}) have been destroyed");
    }

    fn on_budget_exhausted(&mut self, iteration: Iteration) {
        info!("{iteration} simulation terminated after {} iterations", iteration.0);
    }

    fn on_sim_end(&mut self, stats: &SimStats) {
        let at = Iteration(stats.iterations);
        info!("{at} Statistics:");
        info!("{at}     number of moves executed: {}", stats.moves);
        info!("{at}     {stats}");
    }
}
