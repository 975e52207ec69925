//! Logger module for release-zalgo
//!
//! Go-style simple logging: `[LEVEL] message`
//!
//! The runtime itself only emits `trace` and `debug` events; install a
//! subscriber at one of those levels to watch thenables settle.
//!
//! # Usage
//!
//! ```rust
//! use release_zalgo::util::logger;
//!
//! logger::init();
//! tracing::info!("Hello, {}", "world");
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

use crate::util::config::LogConfig;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}

/// Logger errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Unknown log level: {0:?}")]
    UnknownLevel(String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize logger with default configuration (INFO level)
///
/// Does nothing if a global subscriber is already installed.
pub fn init() {
    let _ = try_init_with_level(LogLevel::Info, false);
}

/// Initialize logger with custom level (Go style: `[LEVEL] message`)
pub fn init_with_level(level: LogLevel) {
    let _ = try_init_with_level(level, false);
}

/// Initialize logger, reporting failure instead of ignoring it
pub fn try_init_with_level(
    level: LogLevel,
    ansi: bool,
) -> Result<(), LoggerError> {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    // Go 风格：显示 [LEVEL] 前缀，不显示时间、不显示模块路径
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).try_init()?;
    Ok(())
}

/// Initialize logger from the `[log]` section of the configuration
pub fn init_from_config(config: &LogConfig) -> Result<(), LoggerError> {
    let level = config.level.parse()?;
    try_init_with_level(level, config.ansi)
}

/// Initialize logger for debug use (DEBUG level)
pub fn init_debug() {
    init_with_level(LogLevel::Debug);
}
