//! Builder for constructing a [`Sim`].

use inv_core::{RandomSource, SimConfig, SimRng};
use inv_map::Graph;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<R>`].
///
/// | Method        | Default                                        |
/// |---------------|------------------------------------------------|
/// | `.rng(r)`     | `SimRng` seeded from `config.resolve_seed()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(4).with_seed(7), graph)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: RandomSource = SimRng> {
    config: SimConfig,
    graph:  Graph,
    rng:    R,
}

impl SimBuilder<SimRng> {
    /// Seeds the RNG now, so the seed is fixed before the run starts.
    pub fn new(config: SimConfig, graph: Graph) -> Self {
        let rng = SimRng::new(config.resolve_seed());
        Self { config, graph, rng }
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Replace the random source, e.g. with a `ScriptedRng` in tests.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> SimBuilder<R2> {
        SimBuilder { config: self.config, graph: self.graph, rng }
    }

    /// Check the graph and return a ready-to-run [`Sim`].
    ///
    /// The graph must be non-empty and road-symmetric.
    pub fn build(self) -> SimResult<Sim<R>> {
        if self.graph.is_empty() {
            return Err(SimError::EmptyMap);
        }
        self.graph.validate()?;
        Ok(Sim::new(self.config, self.graph, self.rng))
    }
}
