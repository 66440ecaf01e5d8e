use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// One of the three doors offered per floor in the branching-choice variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl Choice {
    /// All three doors in presentation order.
    pub const fn all() -> [Choice; 3] {
        [Choice::Left, Choice::Middle, Choice::Right]
    }
    /// Total function from a raw label, `None` outside the closed set.
    pub fn parse(label: &str) -> Option<Choice> {
        match label.to_lowercase().as_str() {
            "left" => Some(Choice::Left),
            "middle" => Some(Choice::Middle),
            "right" => Some(Choice::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Left => write!(f, "left"),
            Choice::Middle => write!(f, "middle"),
            Choice::Right => write!(f, "right"),
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Choice::Left,
            1 => Choice::Middle,
            _ => Choice::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_display() {
        for choice in Choice::all() {
            assert!(Choice::parse(&choice.to_string()) == Some(choice));
        }
    }

    #[test]
    fn parse_rejects_foreign_labels() {
        assert!(Choice::parse("center") == None);
    }
}
