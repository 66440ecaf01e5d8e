use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// Game variant tag selecting which breakdown a report carries.
///
/// Closed set so dispatch is an exhaustive match rather than a string
/// comparison: adding a variant is a compile-time concern.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Reveal cells on a fixed grid without hitting a hazard (mines).
    GridHazard,
    /// Climb floors picking one of three doors per floor (towers).
    BranchingChoice,
    /// Cross lanes in sequence without getting caught (chicken road).
    SequentialHazard,
}

impl Variant {
    /// All variants in presentation order.
    pub const fn all() -> [Variant; 3] {
        [
            Variant::GridHazard,
            Variant::BranchingChoice,
            Variant::SequentialHazard,
        ]
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::GridHazard => write!(f, "grid-hazard"),
            Variant::BranchingChoice => write!(f, "branching-choice"),
            Variant::SequentialHazard => write!(f, "sequential-hazard"),
        }
    }
}

/// Accepts the canonical tags and the upstream game names as aliases.
impl TryFrom<&str> for Variant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "grid-hazard" | "mines" => Ok(Variant::GridHazard),
            "branching-choice" | "towers" => Ok(Variant::BranchingChoice),
            "sequential-hazard" | "chickenroad" => Ok(Variant::SequentialHazard),
            other => Err(format!("unknown game variant: {}", other)),
        }
    }
}

impl Arbitrary for Variant {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Variant::GridHazard,
            1 => Variant::BranchingChoice,
            _ => Variant::SequentialHazard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for variant in Variant::all() {
            assert!(Variant::try_from(variant.to_string().as_str()) == Ok(variant));
        }
    }

    #[test]
    fn upstream_aliases_resolve() {
        assert!(Variant::try_from("mines") == Ok(Variant::GridHazard));
        assert!(Variant::try_from("towers") == Ok(Variant::BranchingChoice));
        assert!(Variant::try_from("chickenroad") == Ok(Variant::SequentialHazard));
        assert!(Variant::try_from("plinko").is_err());
    }
}
