use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// Difficulty tier selected by the player, affecting hazard density and
/// payout curve.
///
/// The set is closed: labels outside these four parse to `None` and the
/// caller decides whether to drop or log the round. The ordering is the
/// canonical easy -> extreme presentation order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Easy = 0,
    #[default]
    Medium = 1,
    Hard = 2,
    Extreme = 3,
}

impl Risk {
    /// All four tiers in canonical order.
    pub const fn all() -> [Risk; 4] {
        [Risk::Easy, Risk::Medium, Risk::Hard, Risk::Extreme]
    }
    /// Theoretical return-to-player for this tier, on a 0-100 scale.
    ///
    /// Reference constants from the game's published payout design, not
    /// derived from observed rounds.
    pub const fn rtp(&self) -> f64 {
        match self {
            Risk::Easy => 98.0,
            Risk::Medium => 97.0,
            Risk::Hard => 96.0,
            Risk::Extreme => 95.0,
        }
    }
    /// Total function from a raw label to a tier, `None` for anything
    /// outside the closed set. Case-insensitive.
    pub fn parse(label: &str) -> Option<Risk> {
        match label.to_lowercase().as_str() {
            "easy" => Some(Risk::Easy),
            "medium" => Some(Risk::Medium),
            "hard" => Some(Risk::Hard),
            "extreme" => Some(Risk::Extreme),
            _ => None,
        }
    }
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Risk::Easy => write!(f, "easy"),
            Risk::Medium => write!(f, "medium"),
            Risk::Hard => write!(f, "hard"),
            Risk::Extreme => write!(f, "extreme"),
        }
    }
}

impl Arbitrary for Risk {
    fn random() -> Self {
        match rand::random_range(0..4) {
            0 => Risk::Easy,
            1 => Risk::Medium,
            2 => Risk::Hard,
            _ => Risk::Extreme,
        }
    }
}
