//! Log bridge for the `poster-type` binary.
//!
//! Routes `log` records from every workspace crate to stderr as
//! `[timestamp] [LEVEL] [target] message` lines, keeping stdout for command
//! output.
//!
//! Level precedence: `--log-level`, then `RUST_LOG`, then the config file's
//! `log_level`.

use parking_lot::Mutex;
use poster_type_config::LogLevel;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Metadata, Record};

struct BridgeLogger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            record.args(),
        );
        let mut sink = self.sink.lock();
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

/// Install the bridge at `level`.
///
/// Safe to call more than once: later calls only change the level.
pub fn init_log_bridge(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| BridgeLogger {
        sink: Mutex::new(Box::new(std::io::stderr())),
    });
    // Fails only when a logger is already installed, which is fine.
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

/// Change the level after installation.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// `RUST_LOG`, if set.
pub fn env_log_level() -> Option<String> {
    std::env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty())
}

/// Pick the effective level from the three sources.
///
/// An unparsable `RUST_LOG` is ignored.
pub fn resolve_level(
    cli: Option<LogLevel>,
    rust_log: Option<&str>,
    config: LogLevel,
) -> LevelFilter {
    cli.or_else(|| rust_log.and_then(parse_rust_log))
        .unwrap_or(config)
        .to_level_filter()
}

/// Accepts a bare level (`debug`) or `env_logger`-style directives
/// (`poster_type=debug`); the last directive wins.
pub fn parse_rust_log(value: &str) -> Option<LogLevel> {
    let directive = value.rsplit(',').next()?;
    let level = directive.rsplit('=').next()?;
    level.parse().ok()
}

fn format_line(timestamp: &str, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, args)
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Trace), Some("error"), LogLevel::Off),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_rust_log_beats_config() {
        assert_eq!(
            resolve_level(None, Some("debug"), LogLevel::Warn),
            LevelFilter::Debug
        );
        assert_eq!(
            resolve_level(None, Some("poster_type=info"), LogLevel::Warn),
            LevelFilter::Info
        );
    }

    #[test]
    fn test_bad_rust_log_falls_back_to_config() {
        assert_eq!(
            resolve_level(None, Some("loud"), LogLevel::Error),
            LevelFilter::Error
        );
        assert_eq!(resolve_level(None, None, LogLevel::Off), LevelFilter::Off);
    }

    #[test]
    fn test_line_format() {
        let line = format_line(
            "12.000001",
            Level::Info,
            "poster_type",
            &format_args!("hello {}", 1),
        );
        assert_eq!(line, "[12.000001] [INFO ] [poster_type] hello 1\n");
    }
}
