//! The `Sim` run controller.

use inv_core::{Iteration, RandomSource, SimConfig, SimRng};
use inv_map::Graph;

use crate::{MovementEngine, Outcome, SimObserver, SimStats, TickSummary};

/// Drives one invasion from deployment to termination.
///
/// `Sim` owns the graph (through its [`MovementEngine`]), the random source,
/// and every counter of the run.  Nothing is process-global: the current
/// iteration is passed down to the engine and observers explicitly.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim<R: RandomSource = SimRng> {
    pub config: SimConfig,

    /// Graph plus move counter.
    pub engine: MovementEngine,

    /// Source of every random choice in the run.
    pub rng: R,

    /// 0 during deployment, then the number of the last completed tick.
    pub iteration: Iteration,

    /// City count at load time, for "N of M destroyed" reporting.
    pub max_cities: usize,

    /// Aliens placed by [`deploy`](Self::deploy).
    pub deployed: u32,
}

impl<R: RandomSource> Sim<R> {
    pub(crate) fn new(config: SimConfig, graph: Graph, rng: R) -> Self {
        let max_cities = graph.len();
        Self {
            config,
            engine: MovementEngine::new(graph),
            rng,
            iteration: Iteration::ZERO,
            max_cities,
            deployed: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn graph(&self) -> &Graph {
        &self.engine.graph
    }

    /// Deploy, then tick until the budget runs out or no city is left.
    ///
    /// `observer.on_sim_end` receives the statistics on every exit path.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimStats {
        let outcome = self.drive(observer);
        let stats = self.stats(outcome);
        observer.on_sim_end(&stats);
        stats
    }

    /// Deploy `config.agents` aliens at the current iteration.
    pub fn deploy<O: SimObserver>(&mut self, observer: &mut O) -> u32 {
        observer.on_deploy_start(self.iteration, self.config.agents);
        let deployed = self.engine.deploy(
            self.config.agents,
            self.iteration,
            &mut self.rng,
            observer,
        );
        self.deployed += deployed;
        observer.on_deployed(self.iteration, &self.engine.graph);
        deployed
    }

    /// Advance the iteration counter and move every alien once.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        self.iteration = self.iteration.next();
        let summary = self.engine.step(self.iteration, &mut self.rng, observer);
        observer.on_tick_end(self.iteration, &summary);
        summary
    }

    /// Run up to `n` ticks, ignoring the configured budget; stops early once
    /// the graph is empty.  Returns the number of ticks run.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut ran = 0;
        while ran < n && !self.engine.graph.is_empty() {
            self.tick(observer);
            ran += 1;
        }
        ran
    }

    /// Statistics as of now, labelled with `outcome`.
    pub fn stats(&self, outcome: Outcome) -> SimStats {
        SimStats {
            iterations: self.iteration.0,
            moves:      self.engine.moves,
            deployed:   self.deployed,
            max_cities: self.max_cities,
            remaining:  self.engine.graph.len(),
            outcome,
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    fn drive<O: SimObserver>(&mut self, observer: &mut O) -> Outcome {
        self.deploy(observer);
        if self.engine.graph.is_empty() {
            observer.on_all_destroyed(self.iteration, self.max_cities);
            return Outcome::AllDestroyed;
        }

        while self.iteration.0 < self.config.iterations {
            self.tick(observer);
            if self.engine.graph.is_empty() {
                observer.on_all_destroyed(self.iteration, self.max_cities);
                return Outcome::AllDestroyed;
            }
        }

        observer.on_budget_exhausted(self.iteration);
        Outcome::BudgetExhausted
    }
}
