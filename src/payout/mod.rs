//! The payout table generator: closed-form combinatorics, no round data.

pub mod table;

pub use table::table;
pub use table::Payout;
