use log::{debug, info};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

use crate::error::AnalyzerError;
use crate::ranking::{top_k, SlotCount, ZoneCount};
use crate::record::parse_trip;
use crate::shared::{new_hash_map, open_source, HashMap};

// Typical city datasets have a few hundred zones and well under this many slots.
const INITIAL_CAPACITY: usize = 4096;

/// Line totals for one ingestion. The header is not included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub lines: u64,
    pub counted: u64,
    pub skipped: u64,
}

/// Pickup counts per zone and per (zone, hour) slot for the most recently
/// ingested trip file.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    zone_counts: HashMap<String, u64>,
    slot_counts: HashMap<(String, u8), u64>,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        TripAnalyzer {
            zone_counts: new_hash_map(),
            slot_counts: new_hash_map(),
        }
    }

    /// Replace the current counts with those of the file at `path`.
    ///
    /// If the file cannot be opened the counts are left empty and
    /// [`AnalyzerError::Open`] is returned, so an unreadable file can be told
    /// apart from a file without a single valid trip.
    pub fn ingest_file<P: AsRef<Path>>(&mut self, path: P) -> Result<IngestSummary, AnalyzerError> {
        let path = path.as_ref();
        self.reset();
        let source = open_source(path).map_err(|source| AnalyzerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!("ingesting trips from {}", path.display());
        self.ingest(source)
    }

    /// Replace the current counts with those read from `source`.
    ///
    /// The first line is a header and is always discarded. Malformed lines
    /// are skipped. On a read error the trips counted so far are kept.
    pub fn ingest<R: BufRead>(&mut self, mut source: R) -> Result<IngestSummary, AnalyzerError> {
        self.reset();
        let mut summary = IngestSummary::default();
        let mut buf = Vec::new();

        // header
        if source.read_until(b'\n', &mut buf)? == 0 {
            return Ok(summary);
        }
        self.zone_counts.reserve(INITIAL_CAPACITY);
        self.slot_counts.reserve(INITIAL_CAPACITY);

        loop {
            buf.clear();
            if source.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            summary.lines += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_trip(&line) {
                Some(trip) => {
                    *self.zone_counts.entry(trip.zone.to_owned()).or_default() += 1;
                    *self
                        .slot_counts
                        .entry((trip.zone.to_owned(), trip.hour))
                        .or_default() += 1;
                    summary.counted += 1;
                }
                None => summary.skipped += 1,
            }
        }

        info!(
            "counted {} of {} trips ({} skipped) across {} zones",
            summary.counted,
            summary.lines,
            summary.skipped,
            self.zone_counts.len()
        );
        Ok(summary)
    }

    /// The `k` zones with the most pickups, busiest first, ties by zone name.
    pub fn top_zones(&self, k: usize) -> Vec<ZoneCount> {
        let entries = self
            .zone_counts
            .iter()
            .map(|(zone, &count)| ZoneCount {
                zone: zone.clone(),
                count,
            })
            .collect();
        let ranked = top_k(entries, k, ZoneCount::rank);
        debug!("top {} of {} zones", ranked.len(), self.zone_counts.len());
        ranked
    }

    /// The `k` busiest (zone, hour) slots, ties by zone name and then hour.
    pub fn top_busy_slots(&self, k: usize) -> Vec<SlotCount> {
        let entries = self
            .slot_counts
            .iter()
            .map(|((zone, hour), &count)| SlotCount {
                zone: zone.clone(),
                hour: *hour,
                count,
            })
            .collect();
        let ranked = top_k(entries, k, SlotCount::rank);
        debug!("top {} of {} slots", ranked.len(), self.slot_counts.len());
        ranked
    }

    pub fn zone_counts(&self) -> &HashMap<String, u64> {
        &self.zone_counts
    }

    pub fn slot_counts(&self) -> &HashMap<(String, u8), u64> {
        &self.slot_counts
    }

    fn reset(&mut self) {
        self.zone_counts.clear();
        self.slot_counts.clear();
    }
}
