//! `inv-sim` — the invasion itself.
//!
//! # Run loop
//!
//! ```text
//! iteration 0:            Deploy — agent i lands on a random current city;
//!                         landing on an occupied city destroys it.
//! for iteration 1..=N:    Move   — every occupied city (name order, snapshot
//!                         taken at tick start) sends its alien down a random
//!                         road; arrivals on occupied cities destroy them.
//!                         Stop early once no city is left.
//! end:                    SimStats → observer.on_sim_end
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`engine`]   | `MovementEngine` — deploy, move-into, one tick             |
//! | [`sim`]      | `Sim<R>` — run controller owning iteration and counters    |
//! | [`builder`]  | `SimBuilder` — validates inputs and seeds the RNG          |
//! | [`observer`] | `SimObserver` — log-sink hooks, `NoopObserver`             |
//! | [`event`]    | `DestructionEvent`, `TickSummary`                          |
//! | [`stats`]    | `SimStats`, `Outcome`                                      |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use inv_core::SimConfig;
//! use inv_sim::{NoopObserver, SimBuilder};
//!
//! let graph = inv_map::load_file(path)?;
//! let mut sim = SimBuilder::new(SimConfig::new(10), graph).build()?;
//! let stats = sim.run(&mut NoopObserver);
//! println!("{stats}");
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use engine::{MoveOutcome, MovementEngine};
pub use error::{SimError, SimResult};
pub use event::{DestructionEvent, TickSummary};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{Outcome, SimStats};
