use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use trip_zones::{AnalyzerError, IngestSummary, SlotCount, TripAnalyzer, ZoneCount};

const HEADER: &str = "trip_id,pickup_zone,dropoff_zone,pickup_time,distance,fare\n";

fn write_trips(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = HEADER.to_string();
    rows.iter().for_each(|row| {
        contents.push_str(row);
        contents.push('\n');
    });
    fs::write(&path, contents).unwrap();
    path
}

fn zc(zone: &str, count: u64) -> ZoneCount {
    ZoneCount {
        zone: zone.to_string(),
        count,
    }
}

fn sc(zone: &str, hour: u8, count: u64) -> SlotCount {
    SlotCount {
        zone: zone.to_string(),
        hour,
        count,
    }
}

#[test]
fn ranks_zones_and_slots_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_trips(
        dir.path(),
        "trips.csv",
        &[
            "1,Midtown,Soho,2024-03-01 08:05:00,1.2,9.50",
            "2,Midtown,Soho,2024-03-01 08:45:00,0.8,7.00",
            "3,Midtown,Harlem,2024-03-01 17:10:00,4.1,18.25",
            "4,Harlem,Midtown,2024-03-01 17:20:00,4.0,17.75",
            "5,Harlem,Midtown,2024-03-02 17:55:00,4.3,19.00",
            "6,Astoria,Midtown,2024-03-02 23:01:00,6.2,24.00",
            "7,Astoria,,2024-03-02 23:01:00,6.2,24.00",
            "8,Soho,Midtown,not a time,1.0,6.00",
        ],
    );

    let mut analyzer = TripAnalyzer::new();
    let summary = analyzer.ingest_file(&path).unwrap();
    assert_eq!(
        summary,
        IngestSummary {
            lines: 8,
            counted: 6,
            skipped: 2
        }
    );

    assert_eq!(
        analyzer.top_zones(10),
        vec![zc("Midtown", 3), zc("Harlem", 2), zc("Astoria", 1)]
    );
    assert_eq!(analyzer.top_zones(2), vec![zc("Midtown", 3), zc("Harlem", 2)]);
    assert_eq!(
        analyzer.top_busy_slots(3),
        vec![sc("Harlem", 17, 2), sc("Midtown", 8, 2), sc("Astoria", 23, 1)]
    );
    assert!(analyzer.top_busy_slots(0).is_empty());
}

#[test]
fn missing_file_is_reported_and_clears_counts() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_trips(dir.path(), "good.csv", &["1,A,B,2024-03-01 08:05:00,1,2"]);

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&good).unwrap();
    assert_eq!(analyzer.top_zones(1), vec![zc("A", 1)]);

    let err = analyzer.ingest_file(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, AnalyzerError::Open { .. }));
    assert!(err.to_string().contains("missing.csv"));
    assert!(analyzer.top_zones(1).is_empty());
    assert!(analyzer.top_busy_slots(1).is_empty());
}

#[test]
fn readable_file_without_valid_trips_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_trips(dir.path(), "bad.csv", &["1,A,B,garbage,1,2", "1,A,B"]);

    let mut analyzer = TripAnalyzer::new();
    let summary = analyzer.ingest_file(&path).unwrap();
    assert_eq!(summary.counted, 0);
    assert_eq!(summary.skipped, 2);
    assert!(analyzer.top_zones(5).is_empty());
}

#[test]
fn second_file_replaces_first() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_trips(
        dir.path(),
        "a.csv",
        &["1,A,B,2024-03-01 08:05:00,1,2", "2,A,B,2024-03-01 09:05:00,1,2"],
    );
    let b = write_trips(dir.path(), "b.csv", &["1,B,A,2024-03-01 10:05:00,1,2"]);

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&a).unwrap();
    analyzer.ingest_file(&b).unwrap();
    assert_eq!(analyzer.top_zones(10), vec![zc("B", 1)]);
    assert_eq!(analyzer.top_busy_slots(10), vec![sc("B", 10, 1)]);
}

#[test]
fn reads_gzipped_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.csv.gz");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(HEADER.as_bytes()).unwrap();
    encoder
        .write_all(b"1,Z,B,2024-03-01 08:05:00,1,2\n2,Z,B,2024-03-01 08:15:00,1,2\n")
        .unwrap();
    encoder.finish().unwrap();

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path).unwrap();
    assert_eq!(analyzer.top_busy_slots(1), vec![sc("Z", 8, 2)]);
}
