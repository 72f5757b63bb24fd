#![cfg(feature = "std")]

//! Stderr logger for the game binaries.
//!
//! Records from this crate print at the level chosen by `MINESWEEPER_LOG`.
//! Records from dependencies only print at `warn` or above.

use log::{self, LevelFilter, Metadata, Record};
use std::env;

const LOG_ENV: &str = "MINESWEEPER_LOG";
const CRATE_TARGET: &str = "minesweeper";

struct GameLogger {
    level: LevelFilter,
}

impl GameLogger {
    fn threshold(&self, target: &str) -> LevelFilter {
        if is_own_target(target) {
            self.level
        } else {
            self.level.min(LevelFilter::Warn)
        }
    }
}

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.threshold(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{:<5} {}] {}",
            record.level(),
            short_target(record.target()),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn is_own_target(target: &str) -> bool {
    target == CRATE_TARGET
        || target
            .strip_prefix(CRATE_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Module part of a target, without the crate prefix: `minesweeper::model`
/// prints as `model`. Foreign targets are left alone.
fn short_target(target: &str) -> &str {
    match target.strip_prefix(CRATE_TARGET) {
        Some("") => CRATE_TARGET,
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

/// Level for a `MINESWEEPER_LOG` value. Unset or unparsable values give `info`.
fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Stdout stays free for boards and reports.
/// Calling this more than once keeps the first logger.
pub fn init_logging() {
    let level = level_from_env(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(GameLogger { level })).is_ok() {
        log::set_max_level(level);
        log::debug!("logging at {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    #[test]
    fn env_level_defaults_to_info() {
        assert_eq!(level_from_env(None), LevelFilter::Info);
        assert_eq!(level_from_env(Some("chatty")), LevelFilter::Info);
        assert_eq!(level_from_env(Some(" Trace ")), LevelFilter::Trace);
        assert_eq!(level_from_env(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn targets_print_without_crate_prefix() {
        assert_eq!(short_target("minesweeper::model"), "model");
        assert_eq!(short_target("minesweeper"), "minesweeper");
        assert_eq!(short_target("minesweeper_extra::x"), "minesweeper_extra::x");
        assert_eq!(short_target("rand::rngs"), "rand::rngs");
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        let logger = GameLogger {
            level: LevelFilter::Debug,
        };
        fn meta(level: Level, target: &str) -> Metadata<'_> {
            Metadata::builder().level(level).target(target).build()
        }
        assert!(logger.enabled(&meta(Level::Debug, "minesweeper::model")));
        assert!(!logger.enabled(&meta(Level::Trace, "minesweeper::model")));
        assert!(!logger.enabled(&meta(Level::Info, "rand")));
        assert!(logger.enabled(&meta(Level::Warn, "rand")));
        assert!(!logger.enabled(&meta(Level::Debug, "minesweeper_extra")));
    }
}
