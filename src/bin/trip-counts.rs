use clap::Parser;
use itertools::Itertools;
use trip_zones::shared::HashMap;
use trip_zones::{AnalyzerError, TripAnalyzer};

/// Print the pickup count of every zone as a JSON object, busiest first
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with one trip per line (optionally gzipped)
    #[arg(short, long)]
    path: String,

    /// Only print zones with more pickups than this
    #[arg(short, long, default_value_t = 0)]
    min_count: u64,
}

fn main() -> Result<(), AnalyzerError> {
    env_logger::init();
    let args = Args::parse();

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&args.path)?;

    // serde_json would lose the ordering, so write the object by hand
    let mut zones = busiest_first(analyzer.zone_counts(), args.min_count)
        .into_iter()
        .map(|(zone, count)| format!("  {}: {}", serde_json::Value::from(zone), count));

    print!("{{\n");
    if let Some(first) = zones.next() {
        print!("{}", first);
    }
    zones.for_each(|line| print!(",\n{}", line));
    print!("\n}}\n");
    Ok(())
}

/// Zones with more than `min_count` pickups, busiest first, ties by name.
fn busiest_first(counts: &HashMap<String, u64>, min_count: u64) -> Vec<(&str, u64)> {
    counts
        .iter()
        .filter(|(_, &count)| count > min_count)
        .sorted_by(|(za, ca), (zb, cb)| cb.cmp(ca).then_with(|| za.cmp(zb)))
        .map(|(zone, &count)| (zone.as_str(), count))
        .collect()
}
