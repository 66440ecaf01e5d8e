use crate::rounds::Round;
use crate::support::mean;
use crate::support::percent;
use crate::support::round2;
use crate::Rate;
use crate::DEFAULT_LANES;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A round that ends within the first 3 lanes counts as caught early.
const EARLY_LANES: usize = 3;

/// Lane-by-lane analysis for the sequential-hazard (road-cross) variant.
///
/// Danger scoring looks at the drop in survival between consecutive lanes:
/// the lane where the most runs end is the most dangerous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneAnalysis {
    pub total_rounds: usize,
    pub avg_distance: f64,
    pub max_distance: usize,
    /// Share of rounds whose distance reached at least each lane.
    /// Non-increasing in the lane index by construction.
    pub lane_success_rates: BTreeMap<usize, Rate>,
    pub most_dangerous_lane: usize,
    pub safest_lane: usize,
    pub caught_early_rate: Rate,
    pub completed_rate: Rate,
}

impl Default for LaneAnalysis {
    fn default() -> Self {
        Self {
            total_rounds: 0,
            avg_distance: 0.,
            max_distance: 0,
            lane_success_rates: BTreeMap::new(),
            most_dangerous_lane: 1,
            safest_lane: 1,
            caught_early_rate: 0.,
            completed_rate: 0.,
        }
    }
}

impl LaneAnalysis {
    pub fn new(rounds: &[Round], total_lanes: usize) -> Self {
        if rounds.is_empty() {
            return Self::default();
        }
        let rates = (1..=total_lanes)
            .map(|lane| {
                (
                    lane,
                    round2(percent(
                        rounds.iter().filter(|r| r.steps >= lane).count(),
                        rounds.len(),
                    )),
                )
            })
            .collect::<BTreeMap<_, _>>();
        let drops = (2..=total_lanes)
            .map(|lane| (lane, rates[&(lane - 1)] - rates[&lane]))
            .collect::<Vec<_>>();
        // first max / first min on ties; both default to lane 1 when fewer
        // than two lanes are configured
        let most_dangerous = drops
            .iter()
            .fold((1, f64::MIN), |(best, top), &(lane, drop)| match drop > top {
                true => (lane, drop),
                false => (best, top),
            })
            .0;
        let safest = drops
            .iter()
            .fold((1, f64::MAX), |(best, low), &(lane, drop)| match drop < low {
                true => (lane, drop),
                false => (best, low),
            })
            .0;
        Self {
            total_rounds: rounds.len(),
            avg_distance: round2(mean(rounds.iter().map(|r| r.steps as f64))),
            max_distance: rounds.iter().map(|r| r.steps).max().unwrap_or(0),
            lane_success_rates: rates,
            most_dangerous_lane: most_dangerous,
            safest_lane: safest,
            caught_early_rate: round2(percent(
                rounds.iter().filter(|r| r.steps <= EARLY_LANES).count(),
                rounds.len(),
            )),
            completed_rate: round2(percent(
                rounds.iter().filter(|r| r.steps >= total_lanes).count(),
                rounds.len(),
            )),
        }
    }
}

impl From<&[Round]> for LaneAnalysis {
    fn from(rounds: &[Round]) -> Self {
        Self::new(rounds, DEFAULT_LANES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    /// Rounds whose per-lane survival matches the given counts out of 100.
    fn with_rates(reached: &[usize]) -> Vec<Round> {
        (0..100)
            .map(|i| {
                let distance = reached.iter().filter(|&&n| i < n).count();
                match distance {
                    0 => Round::loss(0),
                    d => Round::win(d, 1.0),
                }
            })
            .collect()
    }

    #[test]
    fn empty_snapshot_defaults_both_lanes_to_one() {
        let analysis = LaneAnalysis::from(&[][..]);
        assert!(analysis.total_rounds == 0);
        assert!(analysis.most_dangerous_lane == 1);
        assert!(analysis.safest_lane == 1);
        assert!(analysis.completed_rate == 0.);
    }

    #[test]
    fn success_rates_never_increase_with_distance() {
        let rounds = (0..128).map(|_| Round::random()).collect::<Vec<_>>();
        let analysis = LaneAnalysis::from(rounds.as_slice());
        let rates = analysis.lane_success_rates.values().collect::<Vec<_>>();
        assert!(rates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn danger_scoring_finds_the_biggest_and_smallest_drops() {
        // survival 90 / 85 / 40 / 38 over four lanes: lane 3 loses 45 points,
        // lane 4 only 2, so lane 3 is most dangerous and lane 4 safest
        let rounds = with_rates(&[90, 85, 40, 38]);
        let analysis = LaneAnalysis::new(&rounds, 4);
        assert!(analysis.lane_success_rates[&1] == 90.);
        assert!(analysis.lane_success_rates[&2] == 85.);
        assert!(analysis.lane_success_rates[&3] == 40.);
        assert!(analysis.lane_success_rates[&4] == 38.);
        assert!(analysis.most_dangerous_lane == 3);
        assert!(analysis.safest_lane == 4);
    }

    #[test]
    fn single_lane_roads_default_both_indices() {
        let rounds = vec![Round::win(1, 1.1), Round::loss(0)];
        let analysis = LaneAnalysis::new(&rounds, 1);
        assert!(analysis.most_dangerous_lane == 1);
        assert!(analysis.safest_lane == 1);
    }

    #[test]
    fn early_and_completed_rates() {
        let rounds = vec![
            Round::loss(1),
            Round::loss(3),
            Round::win(10, 42.0),
            Round::win(6, 5.5),
        ];
        let analysis = LaneAnalysis::from(rounds.as_slice());
        assert!(analysis.caught_early_rate == 50.);
        assert!(analysis.completed_rate == 25.);
        assert!(analysis.max_distance == 10);
        assert!(analysis.avg_distance == 5.);
    }
}
