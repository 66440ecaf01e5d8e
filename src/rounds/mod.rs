//! Input data model: one completed play of a step-advancing game.

pub mod choice;
pub mod risk;
pub mod round;
pub mod variant;

pub use choice::Choice;
pub use risk::Risk;
pub use round::Round;
pub use variant::Variant;
