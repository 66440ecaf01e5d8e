//! Round analytics for probability-based grid games.
//!
//! Everything here is a pure function over a finite snapshot of [`rounds::Round`]
//! values: callers fetch and time-filter rounds elsewhere, hand them in, and get
//! back plain serializable value objects with all rounding already applied.

pub mod error;
pub mod payout;
pub mod rounds;
pub mod stats;
pub mod support;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Percentages on a 0-100 scale, rounded to 2 decimals at the boundary.
pub type Rate = f64;
/// Payout multipliers and ratio values, rounded to 4 decimals at the boundary.
pub type Multiplier = f64;

// ============================================================================
// GAME STRUCTURE PARAMETERS
// ============================================================================
/// Number of cells in the reveal grid (5x5).
pub const GRID_CELLS: usize = 25;
/// Fewest hazards a round can be configured with.
pub const MIN_HAZARDS: usize = 1;
/// Most hazards a round can be configured with (one cell must stay safe).
pub const MAX_HAZARDS: usize = 24;
/// Floors in the climbing variant unless the caller says otherwise.
pub const DEFAULT_FLOORS: usize = 10;
/// Lanes in the crossing variant unless the caller says otherwise.
pub const DEFAULT_LANES: usize = 10;
/// Target return-to-player used to derive fair multipliers from probabilities.
pub const TARGET_RTP: f64 = 0.97;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
