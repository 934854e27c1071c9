//! `inv-core` — foundational types for the alien-invasion simulator.
//!
//! This crate is a dependency of every other `inv-*` crate.  It has no
//! `inv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`direction`]   | `Direction` — the four road directions                |
//! | [`time`]        | `Iteration`, `SimConfig`                              |
//! | [`rng`]         | `RandomSource`, `SimRng`, `ScriptedRng`               |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use time::{DEFAULT_ITERATIONS, Iteration, SimConfig};
