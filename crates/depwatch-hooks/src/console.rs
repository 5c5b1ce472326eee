//! Developer console output
//!
//! [`ConsoleSink`](crate::sink::ConsoleSink) writes through [`write`]:
//! `console.*` on `wasm32`, stderr elsewhere.
//!
//! | Method | WASM | Non-WASM |
//! |--------|------|----------|
//! | [`ConsoleMethod::Log`] | `console.log` | `eprintln!`, no prefix |
//! | [`ConsoleMethod::Info`] | `console.info` | `eprintln!`, `[INFO] ` prefix |
//! | [`ConsoleMethod::Warn`] | `console.warn` | `eprintln!`, `[WARN] ` prefix |
//! | [`ConsoleMethod::Error`] | `console.error` | `eprintln!`, `[ERROR] ` prefix |

use crate::options::LogLevel;

/// Console method a message is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
	/// `console.log`
	Log,
	/// `console.info`
	Info,
	/// `console.warn`
	Warn,
	/// `console.error`
	Error,
}

impl From<LogLevel> for ConsoleMethod {
	/// The console has no dedicated debug channel that is visible by default,
	/// so `Trace` and `Debug` use `console.log`.
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Trace | LogLevel::Debug => Self::Log,
			LogLevel::Info => Self::Info,
			LogLevel::Warn => Self::Warn,
			LogLevel::Error => Self::Error,
		}
	}
}

/// Text written to stderr for `message` on non-wasm targets
pub fn native_line(method: ConsoleMethod, message: &str) -> String {
	match method {
		ConsoleMethod::Log => message.to_string(),
		ConsoleMethod::Info => format!("[INFO] {message}"),
		ConsoleMethod::Warn => format!("[WARN] {message}"),
		ConsoleMethod::Error => format!("[ERROR] {message}"),
	}
}

/// Write `message` to the browser console
#[cfg(target_arch = "wasm32")]
pub fn write(method: ConsoleMethod, message: &str) {
	match method {
		ConsoleMethod::Log => web_sys::console::log_1(&message.into()),
		ConsoleMethod::Info => web_sys::console::info_1(&message.into()),
		ConsoleMethod::Warn => web_sys::console::warn_1(&message.into()),
		ConsoleMethod::Error => web_sys::console::error_1(&message.into()),
	}
}

/// Write `message` to stderr
#[cfg(not(target_arch = "wasm32"))]
pub fn write(method: ConsoleMethod, message: &str) {
	eprintln!("{}", native_line(method, message));
}
