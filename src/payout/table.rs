use crate::error::Error;
use crate::support::round2;
use crate::Multiplier;
use crate::Rate;
use crate::GRID_CELLS;
use crate::MAX_HAZARDS;
use crate::MIN_HAZARDS;
use crate::TARGET_RTP;
use serde::Deserialize;
use serde::Serialize;

/// One row of the theoretical payout table: reaching `reveals` safe cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub reveals: usize,
    pub multiplier: Multiplier,
    pub probability: Rate,
}

/// Theoretical payout table for a 25-cell grid with `hazards` hazard cells.
///
/// For each achievable safe-reveal count k, the survival probability is the
/// exact chance of drawing k cells without replacement and hitting no
/// hazard: ∏ (25−H−i)/(25−i) for i in 0..k. The fair multiplier is the
/// target RTP over that probability. Probability strictly decreases and the
/// multiplier strictly increases as k grows.
pub fn table(hazards: usize) -> Result<Vec<Payout>, Error> {
    if !(MIN_HAZARDS..=MAX_HAZARDS).contains(&hazards) {
        return Err(Error::Hazards(hazards));
    }
    let safe = GRID_CELLS - hazards;
    log::debug!("payout table for {} hazards, {} safe cells", hazards, safe);
    Ok((1..=safe)
        .map(|reveals| {
            let probability = (0..reveals)
                .map(|i| (safe - i) as f64 / (GRID_CELLS - i) as f64)
                .product::<f64>();
            Payout {
                reveals,
                multiplier: round2(TARGET_RTP / probability),
                probability: round2(probability * 100.),
            }
        })
        .collect())
}
