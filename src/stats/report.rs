use crate::rounds::Round;
use crate::rounds::Variant;
use crate::stats::FloorAnalysis;
use crate::stats::LaneAnalysis;
use crate::stats::PositionHeatmap;
use crate::stats::RiskStats;
use crate::stats::TileAnalysis;
use serde::Deserialize;
use serde::Serialize;

/// The variant-specific half of a report. Exactly one is populated,
/// selected by exhaustive dispatch on [`Variant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakdown {
    Heatmap(PositionHeatmap),
    Floors(FloorAnalysis),
    Lanes(LaneAnalysis),
}

/// Complete per-variant statistics over one snapshot of rounds: the
/// variant-agnostic tile analysis and risk comparison, plus the one
/// breakdown this variant calls for, all with default structural
/// parameters. Call the individual calculators directly for custom grid,
/// floor, or lane counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub variant: Variant,
    pub tiles: TileAnalysis,
    pub risk_levels: Vec<RiskStats>,
    pub breakdown: Breakdown,
}

impl Report {
    pub fn new(rounds: &[Round], variant: Variant) -> Self {
        log::debug!("building {} report over {} rounds", variant, rounds.len());
        Self {
            variant,
            tiles: TileAnalysis::from(rounds),
            risk_levels: RiskStats::breakdown(rounds),
            breakdown: match variant {
                Variant::GridHazard => Breakdown::Heatmap(PositionHeatmap::from(rounds)),
                Variant::BranchingChoice => Breakdown::Floors(FloorAnalysis::from(rounds)),
                Variant::SequentialHazard => Breakdown::Lanes(LaneAnalysis::from(rounds)),
            },
        }
    }
}

impl From<(&[Round], Variant)> for Report {
    fn from((rounds, variant): (&[Round], Variant)) -> Self {
        Self::new(rounds, variant)
    }
}
