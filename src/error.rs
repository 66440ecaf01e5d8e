use crate::MAX_HAZARDS;
use crate::MIN_HAZARDS;

/// Validation failures for engine parameters.
///
/// Round content is handled defensively field-by-field and never errors;
/// only structural parameters are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("hazard count must be between {MIN_HAZARDS} and {MAX_HAZARDS}, got {0}")]
    Hazards(usize),
}
