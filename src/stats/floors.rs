use crate::rounds::Choice;
use crate::rounds::Round;
use crate::support::mean;
use crate::support::percent;
use crate::support::round2;
use crate::support::round4;
use crate::Rate;
use crate::DEFAULT_FLOORS;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Win rate reported for a door that was never picked in the snapshot:
/// a uniform prior over three doors, not an observed statistic.
const UNSEEN_DOOR_RATE: Rate = 33.33;

/// Multiplier growth per floor in the expected-value estimate. A structural
/// approximation of the payout curve, deliberately not calibrated to it.
const FLOOR_FACTOR: f64 = 1.5;

/// Stop floor reported for an empty snapshot. Structural fallback, not a
/// computed recommendation.
const FALLBACK_STOP_FLOOR: usize = 3;

/// Floor-by-floor analysis for the branching-choice (tower-climb) variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorAnalysis {
    pub total_rounds: usize,
    pub max_floor_reached: usize,
    pub avg_floor_reached: f64,
    /// Share of rounds that reached at least each floor. Non-increasing in
    /// the floor index by construction.
    pub floor_success_rates: BTreeMap<usize, Rate>,
    pub left_success_rate: Rate,
    pub middle_success_rate: Rate,
    pub right_success_rate: Rate,
    pub recommended_stop_floor: usize,
    pub expected_value_per_floor: BTreeMap<usize, f64>,
}

impl Default for FloorAnalysis {
    fn default() -> Self {
        Self {
            total_rounds: 0,
            max_floor_reached: 0,
            avg_floor_reached: 0.,
            floor_success_rates: BTreeMap::new(),
            left_success_rate: 0.,
            middle_success_rate: 0.,
            right_success_rate: 0.,
            recommended_stop_floor: FALLBACK_STOP_FLOOR,
            expected_value_per_floor: BTreeMap::new(),
        }
    }
}

impl FloorAnalysis {
    pub fn new(rounds: &[Round], max_floors: usize) -> Self {
        if rounds.is_empty() {
            return Self::default();
        }
        let rates = (1..=max_floors)
            .map(|floor| {
                (
                    floor,
                    round2(percent(
                        rounds.iter().filter(|r| r.steps >= floor).count(),
                        rounds.len(),
                    )),
                )
            })
            .collect::<BTreeMap<_, _>>();
        // illustrative running estimate: survival rate times a multiplier
        // compounding by FLOOR_FACTOR each floor
        let evs = rates
            .iter()
            .map(|(&floor, &rate)| {
                (
                    floor,
                    round4(rate / 100. * FLOOR_FACTOR.powi(floor as i32)),
                )
            })
            .collect::<BTreeMap<_, _>>();
        let door = |choice: Choice| Self::door_rate(rounds, choice);
        Self {
            total_rounds: rounds.len(),
            max_floor_reached: rounds.iter().map(|r| r.steps).max().unwrap_or(0),
            avg_floor_reached: round2(mean(rounds.iter().map(|r| r.steps as f64))),
            left_success_rate: door(Choice::Left),
            middle_success_rate: door(Choice::Middle),
            right_success_rate: door(Choice::Right),
            recommended_stop_floor: evs
                .iter()
                .fold((FALLBACK_STOP_FLOOR, f64::MIN), |(best, top), (&f, &ev)| {
                    match ev > top {
                        true => (f, ev),
                        false => (best, top),
                    }
                })
                .0,
            floor_success_rates: rates,
            expected_value_per_floor: evs,
        }
    }

    /// Win rate among all picks of one door, pooled across rounds.
    /// Defaults to the uniform prior when the door was never picked.
    fn door_rate(rounds: &[Round], choice: Choice) -> Rate {
        let picks = rounds
            .iter()
            .flat_map(|r| r.picks.iter())
            .filter(|(c, _)| *c == choice)
            .collect::<Vec<_>>();
        match picks.len() {
            0 => UNSEEN_DOOR_RATE,
            n => round2(percent(picks.iter().filter(|(_, won)| *won).count(), n)),
        }
    }
}

impl From<&[Round]> for FloorAnalysis {
    fn from(rounds: &[Round]) -> Self {
        Self::new(rounds, DEFAULT_FLOORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn empty_snapshot_falls_back_to_floor_three() {
        let analysis = FloorAnalysis::from(&[][..]);
        assert!(analysis.total_rounds == 0);
        assert!(analysis.recommended_stop_floor == 3);
        assert!(analysis.floor_success_rates.is_empty());
        assert!(analysis.left_success_rate == 0.);
    }

    #[test]
    fn success_rates_never_increase_with_height() {
        let rounds = (0..128).map(|_| Round::random()).collect::<Vec<_>>();
        let analysis = FloorAnalysis::from(rounds.as_slice());
        let rates = analysis.floor_success_rates.values().collect::<Vec<_>>();
        assert!(rates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn unseen_doors_report_the_uniform_prior() {
        let mut round = Round::win(2, 2.25);
        round.picks = vec![(Choice::Left, true), (Choice::Left, false)];
        let analysis = FloorAnalysis::from(vec![round].as_slice());
        assert!(analysis.left_success_rate == 50.);
        assert!(analysis.middle_success_rate == 33.33);
        assert!(analysis.right_success_rate == 33.33);
    }

    #[test]
    fn recommended_stop_maximizes_expected_value() {
        // everyone reaches floor 2, half reach floor 3, nobody reaches 4:
        // ev climbs while survival holds, then collapses
        let rounds = vec![Round::win(3, 3.4), Round::win(2, 2.25)];
        let analysis = FloorAnalysis::new(&rounds, 4);
        assert!(analysis.floor_success_rates[&2] == 100.);
        assert!(analysis.floor_success_rates[&3] == 50.);
        assert!(analysis.floor_success_rates[&4] == 0.);
        assert!(analysis.expected_value_per_floor[&1] == 1.5);
        assert!(analysis.expected_value_per_floor[&2] == 2.25);
        assert!(analysis.expected_value_per_floor[&3] == 1.6875);
        assert!(analysis.recommended_stop_floor == 2);
    }

    #[test]
    fn stop_floor_ties_resolve_to_the_lowest() {
        // 90% reach floor 1, 60% reach floor 2: evs 0.90 * 1.5 = 1.35 and
        // 0.60 * 2.25 = 1.35, an exact tie, so the lower floor wins
        let rounds = std::iter::empty()
            .chain(std::iter::repeat_with(|| Round::loss(0)).take(1))
            .chain(std::iter::repeat_with(|| Round::win(1, 1.5)).take(3))
            .chain(std::iter::repeat_with(|| Round::win(2, 2.25)).take(6))
            .collect::<Vec<_>>();
        let analysis = FloorAnalysis::new(&rounds, 2);
        assert!(analysis.expected_value_per_floor[&1] == 1.35);
        assert!(analysis.expected_value_per_floor[&2] == 1.35);
        assert!(analysis.recommended_stop_floor == 1);
    }
}
