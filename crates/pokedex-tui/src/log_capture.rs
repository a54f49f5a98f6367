/// Debug console log capture
///
/// Every log record accepted by the console filter lands in a bounded ring
/// buffer that the debug console renders. Error records are additionally
/// forwarded to env_logger so they survive after the TUI exits.
use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// Crates whose debug output is interesting by default
const DEFAULT_CONSOLE_MODULES: [&str; 3] = ["pokedex_tui", "pokeapi_client", "pokedex_pager"];

/// A single log entry with timestamp and metadata
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between logger and UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Logger that feeds the debug console and forwards errors to env_logger
pub struct DebugConsoleLogger {
    logs: LogBuffer,
    env_logger: env_logger::Logger,
    console_filter: env_logger::Logger,
}

impl DebugConsoleLogger {
    pub fn new(logs: LogBuffer) -> Self {
        // Terminal output stays at Error so it never fights with the TUI
        let env_logger = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .build();

        // RUST_LOG wins; otherwise only our own crates at Debug
        let console_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            let mut builder = env_logger::Builder::new();
            for module in DEFAULT_CONSOLE_MODULES {
                builder.filter_module(module, log::LevelFilter::Debug);
            }
            builder.build()
        };

        Self {
            logs,
            env_logger,
            console_filter,
        }
    }

    /// Create a new empty log buffer
    pub fn create_buffer() -> LogBuffer {
        Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
    }
}

/// Append to the ring buffer, dropping the oldest entry when full
fn push_entry(logs: &LogBuffer, entry: LogEntry) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }
}

impl Log for DebugConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console_filter.enabled(metadata) || self.env_logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console_filter.enabled(record.metadata()) {
            push_entry(
                &self.logs,
                LogEntry {
                    timestamp: Utc::now(),
                    level: record.level(),
                    target: record.target().to_string(),
                    message: format!("{}", record.args()),
                },
            );
        }

        if self.env_logger.enabled(record.metadata()) {
            self.env_logger.log(record);
        }
    }

    fn flush(&self) {
        self.env_logger.flush();
    }
}

/// Install the debug console logger; call once before anything logs
///
/// By default the console shows Debug+ records from our own crates only.
/// Set RUST_LOG to widen or narrow that, e.g. `RUST_LOG=debug` for all
/// dependencies or `RUST_LOG=pokedex_tui::task=debug` for one module.
/// Note the underscores in crate names.
pub fn init_logger() -> anyhow::Result<LogBuffer> {
    let logs = DebugConsoleLogger::create_buffer();
    let logger = DebugConsoleLogger::new(logs.clone());

    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;
    log::set_max_level(log::LevelFilter::Debug);

    log::info!("Debug console initialized - press ` or ~ to toggle");

    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "pokedex_tui".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let logs = DebugConsoleLogger::create_buffer();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            push_entry(&logs, entry(&format!("line {}", i)));
        }

        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.front().unwrap().message, "line 5");
        assert_eq!(
            logs.back().unwrap().message,
            format!("line {}", MAX_LOG_ENTRIES + 4)
        );
    }
}
