use clap::Parser;
use serde::Serialize;
use trip_zones::{AnalyzerError, IngestSummary, SlotCount, TripAnalyzer, ZoneCount};

/// Report the busiest pickup zones and (zone, hour) slots of a trip file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with one trip per line (optionally gzipped)
    #[arg(short, long)]
    path: String,

    /// Number of zones to report
    #[arg(short, long, default_value_t = 10)]
    zones: usize,

    /// Number of (zone, hour) slots to report
    #[arg(short, long, default_value_t = 10)]
    slots: usize,

    /// Print the report as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    summary: IngestSummary,
    zones: Vec<ZoneCount>,
    slots: Vec<SlotCount>,
}

fn main() -> Result<(), AnalyzerError> {
    env_logger::init();
    let args = Args::parse();

    let mut analyzer = TripAnalyzer::new();
    let summary = analyzer.ingest_file(&args.path)?;
    let report = Report {
        summary,
        zones: analyzer.top_zones(args.zones),
        slots: analyzer.top_busy_slots(args.slots),
    };

    if args.json {
        print!(
            "{}",
            serde_json::to_string_pretty(&report).expect("Serializing json failed")
        );
        return Ok(());
    }

    println!("zone\tcount");
    report
        .zones
        .iter()
        .for_each(|z| println!("{}\t{}", z.zone, z.count));
    println!();
    println!("zone\thour\tcount");
    report
        .slots
        .iter()
        .for_each(|s| println!("{}\t{:02}\t{}", s.zone, s.hour, s.count));
    Ok(())
}
