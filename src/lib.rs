//! Truco match state machine and brute-force hand-strength evaluation.
//!
//! The crate is organized leaf-first: [`cards`] holds the value types,
//! [`combinatorics`] the generic enumerators, [`envido`] and [`truco`] the
//! two scoring tracks, [`gameplay`] the match protocol, and [`stats`] the
//! offline batch pipeline that precomputes lookup tables.
pub mod cards;
pub mod combinatorics;
pub mod envido;
pub mod gameplay;
#[cfg(feature = "batch")]
pub mod stats;
pub mod truco;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table, counter-clockwise, dealer last.
pub type Position = usize;
/// Win-probability estimates and normalized strengths.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Players at the table, two teams by index parity.
pub const N_PLAYERS: usize = 4;
/// Rounds (and cards per hand) in a single deal.
pub const N_ROUNDS: usize = 3;
/// Cards in the Spanish deck without 8s and 9s.
pub const N_CARDS: usize = 40;

// ============================================================================
// BETTING
// ============================================================================
/// Highest truco level: vale cuatro.
pub const MAX_TRUCO: u8 = 4;
/// Highest envido score under the flat rules (6 + 7 + 20).
pub const MAX_ENVIDO: u8 = 33;
/// Offset that marks a "son buenas" declaration over the winning score.
pub const SON_BUENAS: u8 = 100;
/// Envido that has not been declared, or is not known to an observer.
pub const UNKNOWN_ENVIDO: u8 = 255;
/// Bet sentinel for falta envido: the rest of the game is at stake.
pub const FALTA_ENVIDO: u8 = 99;

// ============================================================================
// BATCH PIPELINE
// ============================================================================
/// Bounded capacity of the job queue feeding the worker pool.
pub const JOB_CAPACITY: usize = 100;
/// Bounded capacity of the results queue drained by the aggregator.
pub const RESULT_CAPACITY: usize = 100;
/// Hands between two progress log lines.
pub const PROGRESS_INTERVAL: usize = 500;
/// Column header of the hand table.
pub const HAND_COLUMNS: [&str; 4] = ["hand", "strength", "envido", "combined"];

/// Initialize logging to terminal and file.
///
/// Terminal gets Info and above, `logs/<unix-seconds>.log` gets Debug.
#[cfg(feature = "batch")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
