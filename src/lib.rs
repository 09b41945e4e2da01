//! Camel Cards: poker-style hand ranking with an optional wildcard.
//!
//! - [`cards`] classifies five-card hands, searches wildcard substitutions,
//!   and orders hands by [`cards::Strength`].
//! - [`game`] parses `<hand> <bid>` records and aggregates winnings.
pub mod cards;
pub mod game;

/// Stake attached to a hand.
pub type Bid = u64;

/// Cards per hand.
pub const HAND_SIZE: usize = 5;
/// Input path used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
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
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
