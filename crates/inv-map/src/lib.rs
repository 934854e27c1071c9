//! `inv-map` — the city graph and everything that builds it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`city`]      | `City` — a named node with up to four roads and an occupant |
//! | [`graph`]     | `Graph` — all cities keyed by name, symmetric destruction  |
//! | [`loader`]    | `load_lines`, `load_reader`, `load_file`                   |
//! | [`writer`]    | `write_map`, `render` — graph back to map-file text        |
//! | [`generator`] | `grid_lines`, `grid` — fully connected mesh maps           |
//! | [`error`]     | `MapError`, `MapResult<T>`                                 |
//!
//! # Map file format
//!
//! ```text
//! # comment
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo
//! ```
//!
//! One city per line, fields separated by spaces.  Every road must have a
//! matching back-road on its neighbor; the loader rejects the map otherwise.

pub mod city;
pub mod error;
pub mod generator;
pub mod graph;
pub mod loader;
pub mod writer;


pub use city::City;
pub use error::{MapError, MapResult};
pub use generator::{grid, grid_lines};
pub use graph::Graph;
pub use loader::{load_file, load_lines, load_reader};
pub use writer::{render, write_map};
