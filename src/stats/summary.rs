use crate::rounds::Round;
use crate::support::mean;
use crate::support::percent;
use crate::support::round2;
use crate::support::round4;
use crate::Multiplier;
use crate::Rate;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Hazard count reported when no round in the snapshot carries hazard data.
const DEFAULT_POPULAR_HAZARDS: usize = 3;

/// Headline aggregates over a whole snapshot.
///
/// The same computation over a caller-trimmed slice doubles as a
/// recent-trend readout; time filtering is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_rounds: usize,
    pub win_rate: Rate,
    pub avg_steps: f64,
    /// Mean cashout multiplier over winning rounds only.
    pub avg_cashout_multiplier: Multiplier,
    /// Modal hazard-set size among rounds that carry hazards; first mode on
    /// ties by ascending count.
    pub most_popular_hazard_count: usize,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            total_rounds: 0,
            win_rate: 0.,
            avg_steps: 0.,
            avg_cashout_multiplier: 0.,
            most_popular_hazard_count: DEFAULT_POPULAR_HAZARDS,
        }
    }
}

impl From<&[Round]> for SummaryStats {
    fn from(rounds: &[Round]) -> Self {
        if rounds.is_empty() {
            return Self::default();
        }
        Self {
            total_rounds: rounds.len(),
            win_rate: round2(percent(
                rounds.iter().filter(|r| r.won).count(),
                rounds.len(),
            )),
            avg_steps: round4(mean(rounds.iter().map(|r| r.steps as f64))),
            avg_cashout_multiplier: round4(mean(
                rounds.iter().filter(|r| r.won).map(|r| r.multiplier),
            )),
            most_popular_hazard_count: hazard_counts(rounds)
                .iter()
                .fold((DEFAULT_POPULAR_HAZARDS, 0), |(best, top), (&n, &count)| {
                    match count > top {
                        true => (n, count),
                        false => (best, top),
                    }
                })
                .0,
        }
    }
}

/// One bar of the hazard-count distribution. Only non-empty buckets are
/// emitted, ascending by hazard count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub hazards: usize,
    pub count: usize,
    pub percentage: Rate,
}

impl DistributionBucket {
    /// How the snapshot splits across hazard configurations. Rounds without
    /// hazard data stay in the denominator but emit no bucket.
    pub fn distribution(rounds: &[Round]) -> Vec<DistributionBucket> {
        hazard_counts(rounds)
            .into_iter()
            .map(|(hazards, count)| DistributionBucket {
                hazards,
                count,
                percentage: round2(percent(count, rounds.len())),
            })
            .collect()
    }
}

/// Rounds per hazard-set size, skipping rounds that carry no hazard data.
fn hazard_counts(rounds: &[Round]) -> BTreeMap<usize, usize> {
    rounds
        .iter()
        .map(|r| r.hazards.len())
        .filter(|&n| n > 0)
        .fold(BTreeMap::new(), |mut counts, n| {
            *counts.entry(n).or_insert(0) += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn with_hazards(round: Round, cells: &[usize]) -> Round {
        let mut round = round;
        round.hazards = cells.iter().copied().collect::<BTreeSet<_>>();
        round
    }

    #[test]
    fn empty_snapshot_defaults() {
        let summary = SummaryStats::from(&[][..]);
        assert!(summary.total_rounds == 0);
        assert!(summary.win_rate == 0.);
        assert!(summary.most_popular_hazard_count == 3);
    }

    #[test]
    fn cashout_average_ignores_losses() {
        let rounds = vec![Round::win(4, 2.0), Round::win(2, 1.5), Round::loss(1)];
        let summary = SummaryStats::from(rounds.as_slice());
        assert!(summary.win_rate == 66.67);
        assert!(summary.avg_cashout_multiplier == 1.75);
        assert!(summary.avg_steps == 2.3333);
    }

    #[test]
    fn popular_hazard_count_is_the_mode() {
        let rounds = vec![
            with_hazards(Round::loss(0), &[1, 2, 3]),
            with_hazards(Round::loss(0), &[4, 5, 6]),
            with_hazards(Round::win(2, 1.3), &[7]),
        ];
        let summary = SummaryStats::from(rounds.as_slice());
        assert!(summary.most_popular_hazard_count == 3);
    }

    #[test]
    fn distribution_emits_only_seen_counts() {
        let rounds = vec![
            with_hazards(Round::loss(0), &[1, 2, 3]),
            with_hazards(Round::loss(0), &[4, 5, 6]),
            with_hazards(Round::win(2, 1.3), &[7]),
            Round::win(5, 3.0),
        ];
        let buckets = DistributionBucket::distribution(&rounds);
        assert!(buckets.len() == 2);
        assert!(buckets[0].hazards == 1 && buckets[0].count == 1);
        assert!(buckets[0].percentage == 25.);
        assert!(buckets[1].hazards == 3 && buckets[1].count == 2);
        assert!(buckets[1].percentage == 50.);
    }

    #[test]
    fn empty_distribution_is_empty() {
        assert!(DistributionBucket::distribution(&[]).is_empty());
    }
}
