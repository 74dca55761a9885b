//! Count taxi pickups per zone and per (zone, hour) slot, and rank the
//! busiest ones.
//!
//! ```no_run
//! use trip_zones::TripAnalyzer;
//!
//! let mut analyzer = TripAnalyzer::new();
//! analyzer.ingest_file("trips.csv")?;
//! for zone in analyzer.top_zones(10) {
//!     println!("{}\t{}", zone.zone, zone.count);
//! }
//! # Ok::<(), trip_zones::AnalyzerError>(())
//! ```

mod analyzer;
mod error;
mod ranking;
pub mod record;
pub mod shared;

pub use analyzer::{IngestSummary, TripAnalyzer};
pub use error::AnalyzerError;
pub use ranking::{top_k, SlotCount, ZoneCount};
