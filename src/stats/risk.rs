use crate::rounds::Risk;
use crate::rounds::Round;
use crate::support::mean;
use crate::support::percent;
use crate::support::round2;
use crate::support::round4;
use crate::Multiplier;
use crate::Rate;
use serde::Deserialize;
use serde::Serialize;

/// Per-tier descriptive statistics for the risk-level comparison.
///
/// `theoretical_rtp` is the tier's published constant, a reference value for
/// readers of the report, never derived from the observed rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStats {
    pub risk_level: Risk,
    pub total_rounds: usize,
    pub avg_multiplier: Multiplier,
    pub success_rate: Rate,
    pub big_win_rate: Rate,
    pub avg_steps: f64,
    pub theoretical_rtp: f64,
}

impl RiskStats {
    /// Partition rounds into the four canonical tiers and describe each
    /// non-empty one, in canonical order. Rounds whose tier is `None`
    /// (unrecognized upstream label) are skipped here; they still count in
    /// every tier-agnostic aggregate.
    pub fn breakdown(rounds: &[Round]) -> Vec<RiskStats> {
        Risk::all()
            .into_iter()
            .map(|level| {
                (
                    level,
                    rounds
                        .iter()
                        .filter(|r| r.risk == Some(level))
                        .collect::<Vec<_>>(),
                )
            })
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(level, bucket)| RiskStats {
                risk_level: level,
                total_rounds: bucket.len(),
                avg_multiplier: round4(mean(bucket.iter().map(|r| r.multiplier))),
                success_rate: round2(percent(
                    bucket.iter().filter(|r| r.won).count(),
                    bucket.len(),
                )),
                big_win_rate: round2(percent(
                    bucket.iter().filter(|r| r.big()).count(),
                    bucket.len(),
                )),
                avg_steps: round2(mean(bucket.iter().map(|r| r.steps as f64))),
                theoretical_rtp: level.rtp(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tiers_are_omitted() {
        let rounds = vec![
            Round::win(3, 2.0).at(Risk::Easy),
            Round::loss(1).at(Risk::Easy),
            Round::win(5, 6.5).at(Risk::Hard),
        ];
        let breakdown = RiskStats::breakdown(&rounds);
        assert!(breakdown.len() == 2);
        assert!(breakdown[0].risk_level == Risk::Easy);
        assert!(breakdown[0].total_rounds == 2);
        assert!(breakdown[0].success_rate == 50.);
        assert!(breakdown[1].risk_level == Risk::Hard);
        assert!(breakdown[1].total_rounds == 1);
        assert!(breakdown[1].success_rate == 100.);
        assert!(breakdown[1].big_win_rate == 100.);
    }

    #[test]
    fn unrecognized_tiers_are_skipped_not_defaulted() {
        let mut stray = Round::win(2, 1.5);
        stray.risk = None;
        let rounds = vec![stray, Round::loss(1).at(Risk::Medium)];
        let breakdown = RiskStats::breakdown(&rounds);
        assert!(breakdown.len() == 1);
        assert!(breakdown[0].risk_level == Risk::Medium);
        assert!(breakdown[0].total_rounds == 1);
    }

    #[test]
    fn reference_rtp_comes_from_the_tier() {
        let rounds = vec![Round::win(1, 1.1).at(Risk::Extreme)];
        let breakdown = RiskStats::breakdown(&rounds);
        assert!(breakdown[0].theoretical_rtp == 95.0);
    }

    #[test]
    fn empty_snapshot_yields_no_buckets() {
        assert!(RiskStats::breakdown(&[]).is_empty());
    }
}
