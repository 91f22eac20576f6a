//! Terminal parlor games.
//!
//! Two toy activities behind a numbered menu:
//! - [`hand`] — rock-paper-scissors against a uniformly random house move
//! - [`roulette`] — a uniform pick over user-supplied labels, after a short spin
//!
//! [`menu`] wires both into a blocking read-dispatch loop over a [`menu::Console`].
pub mod error;
pub mod hand;
pub mod menu;
pub mod roulette;

pub use error::ParlorError;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation on the thread-local generator.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ROULETTE PRESENTATION
// Purely cosmetic: the pick is made after the spin, never during it.
// ============================================================================
/// Number of progress ticks emitted before a pick is revealed.
pub const SPIN_TICKS: usize = 3;
/// Pause between progress ticks.
pub const SPIN_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory for timestamped session logs.
pub const LOG_DIR: &str = "logs";

/// Initialize dual logging (terminal + file) with a timestamped log file.
/// Writes DEBUG level to file and WARN to terminal so game output stays readable.
/// Falls back to terminal-only logging if the file cannot be created.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::create_dir_all(LOG_DIR)
        .and_then(|_| std::fs::File::create(format!("{}/{}.log", LOG_DIR, time)))
        .map(|file| simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file));
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = match file {
        Ok(file) => vec![term, file],
        Err(_) => vec![term],
    };
    // a logger already installed (e.g. by an embedding binary) is fine
    let _ = simplelog::CombinedLogger::init(loggers);
}
