use crate::rounds::Round;
use crate::support::mean;
use crate::support::median;
use crate::support::percent;
use crate::support::round2;
use crate::support::round4;
use crate::Multiplier;
use crate::Rate;
use serde::Deserialize;
use serde::Serialize;

/// Step boundaries for the cashout-pattern rates: early is 1-3 steps,
/// mid is 4-7, late is 8 and beyond.
const EARLY_MAX: usize = 3;
const MID_MAX: usize = 7;

/// Tile/step analysis over all rounds of a snapshot.
///
/// Cashout rates are shares of the winning rounds only, failure rates
/// shares of the losing rounds only, so the two families each sum to ~100
/// whenever their population is non-empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileAnalysis {
    pub total_rounds: usize,
    pub avg_steps: f64,
    pub median_steps: f64,
    pub max_steps: usize,
    pub avg_multiplier: Multiplier,
    pub early_cashout_rate: Rate,
    pub mid_cashout_rate: Rate,
    pub late_cashout_rate: Rate,
    pub first_step_fail_rate: Rate,
    pub avg_steps_before_fail: f64,
}

impl From<&[Round]> for TileAnalysis {
    fn from(rounds: &[Round]) -> Self {
        if rounds.is_empty() {
            return Self::default();
        }
        let steps = rounds.iter().map(|r| r.steps).collect::<Vec<_>>();
        let wins = rounds
            .iter()
            .filter(|r| r.won)
            .map(|r| r.steps)
            .collect::<Vec<_>>();
        let fails = rounds
            .iter()
            .filter(|r| !r.won)
            .map(|r| r.steps)
            .collect::<Vec<_>>();
        Self {
            total_rounds: rounds.len(),
            avg_steps: round2(mean(steps.iter().map(|&s| s as f64))),
            median_steps: round2(median(&steps)),
            max_steps: steps.iter().copied().max().unwrap_or(0),
            avg_multiplier: round4(mean(rounds.iter().map(|r| r.multiplier))),
            early_cashout_rate: round2(percent(
                wins.iter().filter(|&&s| s <= EARLY_MAX).count(),
                wins.len(),
            )),
            mid_cashout_rate: round2(percent(
                wins.iter().filter(|&&s| s > EARLY_MAX && s <= MID_MAX).count(),
                wins.len(),
            )),
            late_cashout_rate: round2(percent(
                wins.iter().filter(|&&s| s > MID_MAX).count(),
                wins.len(),
            )),
            first_step_fail_rate: round2(percent(
                fails.iter().filter(|&&s| s == 1).count(),
                fails.len(),
            )),
            avg_steps_before_fail: round2(mean(fails.iter().map(|&s| s as f64))),
        }
    }
}
