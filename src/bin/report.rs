//! Report Binary
//!
//! Reads a JSON array of round records and prints the full statistics
//! report for one game variant.

use clap::Parser;
use gridscope::rounds::Round;
use gridscope::rounds::Variant;
use gridscope::stats::Report;

#[derive(Parser)]
#[command(about = "Round statistics report for one game variant")]
struct Args {
    /// Path to a JSON array of round records.
    #[arg(long)]
    rounds: std::path::PathBuf,
    /// Game variant tag: grid-hazard, branching-choice, or sequential-hazard
    /// (mines / towers / chickenroad also accepted).
    #[arg(long)]
    variant: String,
}

fn main() -> anyhow::Result<()> {
    gridscope::log();
    let args = Args::parse();
    let variant = Variant::try_from(args.variant.as_str()).map_err(anyhow::Error::msg)?;
    let rounds: Vec<Round> = serde_json::from_reader(std::fs::File::open(&args.rounds)?)?;
    log::info!("loaded {} rounds from {}", rounds.len(), args.rounds.display());
    let report = Report::new(&rounds, variant);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
