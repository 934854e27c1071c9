//! `inv-output` — where simulation events go.
//!
//! | Sink                  | Destination                                        |
//! |-----------------------|----------------------------------------------------|
//! | [`TracingObserver`]   | `tracing` events (`INFO` / `DEBUG` / `TRACE`)      |
//! | [`EventLogObserver`]  | any [`EventWriter`]; [`CsvWriter`] ships by default |
//!
//! Both implement `inv_sim::SimObserver` and compose as a tuple:
//!
//! ```rust,ignore
//! use inv_output::{CsvWriter, EventLogObserver, TracingObserver};
//!
//! let csv = EventLogObserver::new(CsvWriter::new(Path::new("./out"))?);
//! let mut sinks = (TracingObserver::new(), Some(csv));
//! sim.run(&mut sinks);
//! if let Some(e) = sinks.1.as_mut().and_then(|o| o.take_error()) {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::TracingObserver;
pub use observer::EventLogObserver;
pub use row::{DestructionRow, SummaryRow};
pub use writer::EventWriter;
