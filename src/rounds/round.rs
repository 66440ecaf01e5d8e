use crate::rounds::choice::Choice;
use crate::rounds::risk::Risk;
use crate::Arbitrary;
use crate::GRID_CELLS;
use serde::Deserialize;
use std::collections::BTreeSet;

/// One completed play of a step-advancing probability game.
///
/// A round is a fact: constructed once from upstream data and only ever read.
/// Field handling is defensive so loosely-collected rounds never abort an
/// aggregation; structural parameters are validated elsewhere instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Raw")]
pub struct Round {
    /// Safe cells / floors / lanes successfully passed.
    pub steps: usize,
    /// Payout multiplier reached. 0 when the round failed without cashing out.
    pub multiplier: f64,
    /// Voluntary cashout (true) vs forced failure (false).
    pub won: bool,
    /// Difficulty tier. `None` means the upstream label fell outside the four
    /// recognized tiers; the risk breakdown skips such rounds, every other
    /// aggregate still counts them. An absent label defaults to medium.
    pub risk: Option<Risk>,
    /// Hazard cell indices for the grid variant. May be empty for other variants.
    pub hazards: BTreeSet<usize>,
    /// Door picks and their outcomes for the branching variant, already
    /// zipped and filtered to recognized labels.
    pub picks: Vec<(Choice, bool)>,
}

impl Round {
    /// A cashed-out round with no variant-specific data attached.
    pub fn win(steps: usize, multiplier: f64) -> Self {
        Self {
            steps,
            multiplier,
            won: true,
            risk: Some(Risk::Medium),
            hazards: BTreeSet::new(),
            picks: Vec::new(),
        }
    }
    /// A failed round with no variant-specific data attached.
    pub fn loss(steps: usize) -> Self {
        Self {
            steps,
            multiplier: 0.,
            won: false,
            risk: Some(Risk::Medium),
            hazards: BTreeSet::new(),
            picks: Vec::new(),
        }
    }
    /// Same round bucketed under a different tier.
    pub fn at(mut self, risk: Risk) -> Self {
        self.risk = Some(risk);
        self
    }
    /// Whether this round counts toward big-win rates (5x or better).
    pub fn big(&self) -> bool {
        self.multiplier >= 5.
    }
}

/// Wire shape of a round as the collectors emit it: flat fields, a free-form
/// risk label, and parallel choice/outcome sequences.
#[derive(Deserialize)]
struct Raw {
    #[serde(default)]
    steps: usize,
    #[serde(default)]
    multiplier: f64,
    #[serde(default)]
    won: bool,
    #[serde(default)]
    risk_level: Option<String>,
    #[serde(default)]
    hazards: Vec<usize>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    outcomes: Vec<bool>,
}

impl From<Raw> for Round {
    fn from(raw: Raw) -> Self {
        Self {
            steps: raw.steps,
            multiplier: raw.multiplier,
            won: raw.won,
            risk: match raw.risk_level {
                None => Some(Risk::Medium),
                Some(ref label) => Risk::parse(label),
            },
            hazards: raw.hazards.into_iter().collect(),
            picks: raw
                .choices
                .iter()
                .zip(raw.outcomes)
                .filter_map(|(label, outcome)| Choice::parse(label).map(|c| (c, outcome)))
                .collect(),
        }
    }
}

impl Arbitrary for Round {
    fn random() -> Self {
        let steps = rand::random_range(0..=12);
        let won = rand::random::<bool>();
        Self {
            steps,
            multiplier: match won {
                true => (0..steps).map(|_| 1.4).product(),
                false => 0.,
            },
            won,
            risk: Some(Risk::random()),
            hazards: (0..3).map(|_| rand::random_range(0..GRID_CELLS)).collect(),
            picks: (0..steps).map(|_| (Choice::random(), true)).collect(),
        }
    }
}
