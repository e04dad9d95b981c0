//! Logging setup for the zombie binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the application. This module provides the one the CLI uses:
//! - Writes to stderr, so stdout stays clean for reports
//! - Maps `-v` counts to a level, with `RUST_LOG` taking precedence

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level selected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
	Trace,
	Debug,
	Info,
	/// Warnings only (default)
	#[default]
	Warn,
}

impl From<u8> for LogLevel {
	/// Convert verbosity count to log level.
	/// 0 = Warn, 1 = Info, 2 = Debug, 3+ = Trace
	fn from(verbosity: u8) -> Self {
		match verbosity {
			0 => LogLevel::Warn,
			1 => LogLevel::Info,
			2 => LogLevel::Debug,
			_ => LogLevel::Trace,
		}
	}
}

impl From<LogLevel> for Level {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Trace => Level::TRACE,
			LogLevel::Debug => Level::DEBUG,
			LogLevel::Info => Level::INFO,
			LogLevel::Warn => Level::WARN,
		}
	}
}

/// Build the filter for `level`, letting `RUST_LOG` override it when set.
pub fn env_filter(level: LogLevel) -> EnvFilter {
	let default = Level::from(level).to_string().to_lowercase();
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a stderr fmt subscriber. Returns false if one was already set.
pub fn init(level: LogLevel) -> bool {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level))
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.is_ok()
}
