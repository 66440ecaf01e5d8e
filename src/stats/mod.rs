//! The statistics calculator: descriptive and risk aggregates over a
//! snapshot of rounds.
//!
//! Every value object here is recomputed fresh per call, pre-rounded, and
//! safe to serialize as-is. Empty snapshots yield documented zero objects,
//! never errors.

pub mod floors;
pub mod heatmap;
pub mod lanes;
pub mod report;
pub mod risk;
pub mod summary;
pub mod tiles;

pub use floors::FloorAnalysis;
pub use heatmap::PositionHeatmap;
pub use lanes::LaneAnalysis;
pub use report::Breakdown;
pub use report::Report;
pub use risk::RiskStats;
pub use summary::DistributionBucket;
pub use summary::SummaryStats;
pub use tiles::TileAnalysis;
