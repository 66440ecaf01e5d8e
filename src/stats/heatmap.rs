use crate::rounds::Round;
use crate::support::percent;
use crate::support::round2;
use crate::Rate;
use crate::GRID_CELLS;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cell partition of the fixed 5x5 layout.
const CORNERS: [usize; 4] = [0, 4, 20, 24];
const EDGES: [usize; 12] = [1, 2, 3, 5, 9, 10, 14, 15, 19, 21, 22, 23];
const CENTER: [usize; 9] = [6, 7, 8, 11, 12, 13, 16, 17, 18];

/// How many cells to surface at each extreme of the frequency ranking.
const EXTREMES: usize = 5;

/// Where hazards land on the grid, pooled over every round of the snapshot.
///
/// Frequencies are shares of the pooled hazard multiset, not per-round
/// averages. The corner/edge/center partition always refers to the 5x5
/// layout regardless of the configured grid size.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionHeatmap {
    pub grid_size: usize,
    pub hazards_analyzed: usize,
    pub corner_hazard_rate: Rate,
    pub edge_hazard_rate: Rate,
    pub center_hazard_rate: Rate,
    pub position_frequency: BTreeMap<usize, Rate>,
    pub safest_positions: Vec<usize>,
    pub riskiest_positions: Vec<usize>,
}

impl PositionHeatmap {
    /// Pool hazard occurrences per cell and rank the extremes. Out-of-range
    /// cell indices in the input are skipped, never an error.
    pub fn new(rounds: &[Round], grid_size: usize) -> Self {
        let mut counts = vec![0usize; grid_size];
        for cell in rounds.iter().flat_map(|r| r.hazards.iter()) {
            if let Some(count) = counts.get_mut(*cell) {
                *count += 1;
            }
        }
        let total = counts.iter().sum::<usize>();
        let pooled = |cells: &[usize]| {
            cells
                .iter()
                .filter_map(|&c| counts.get(c))
                .sum::<usize>()
        };
        // one stable ascending sort drives both extremes, so ties keep
        // ascending cell order
        let mut ranked = (0..grid_size).collect::<Vec<_>>();
        ranked.sort_by_key(|&cell| counts[cell]);
        Self {
            grid_size,
            hazards_analyzed: total,
            corner_hazard_rate: round2(percent(pooled(&CORNERS), total)),
            edge_hazard_rate: round2(percent(pooled(&EDGES), total)),
            center_hazard_rate: round2(percent(pooled(&CENTER), total)),
            position_frequency: counts
                .iter()
                .enumerate()
                .map(|(cell, &count)| (cell, round2(percent(count, total))))
                .collect(),
            safest_positions: ranked.iter().take(EXTREMES).copied().collect(),
            riskiest_positions: ranked
                .iter()
                .skip(grid_size.saturating_sub(EXTREMES))
                .copied()
                .collect(),
        }
    }
}

impl From<&[Round]> for PositionHeatmap {
    fn from(rounds: &[Round]) -> Self {
        Self::new(rounds, GRID_CELLS)
    }
}
