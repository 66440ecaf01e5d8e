//! Payout Table Binary
//!
//! Prints the theoretical payout table for a given hazard count. Needs no
//! round data at all; the table is closed-form.

use clap::Parser;

#[derive(Parser)]
#[command(about = "Theoretical payout table for a 25-cell grid")]
struct Args {
    /// Number of hazard cells (1-24).
    #[arg(long, default_value_t = 3)]
    hazards: usize,
}

fn main() -> anyhow::Result<()> {
    gridscope::log();
    let args = Args::parse();
    let table = gridscope::payout::table(args.hazards)?;
    log::info!("payout table for {} hazards: {} rows", args.hazards, table.len());
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
