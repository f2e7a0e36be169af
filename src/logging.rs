//! Logging setup and panic rendering for must-failures.
//!
//! This module provides:
//! - A configurable stderr `tracing` subscriber honoring `RUST_LOG`
//! - A panic hook that renders [`KnownError`] payloads as text or JSON

use std::panic::{self, Location};
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::KnownError;

/// Minimum level of events written by the subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    /// Enough to see every must-failure
    #[default]
    Error,
    Off,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// How failures are reported: the subscriber for the `tracing` event and
/// the panic hook for the panic itself.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Minimum level written to stderr
    pub level: LogLevel,
    /// Prefix events with a timestamp
    pub with_timestamps: bool,
    /// Include the file and line of the event
    pub with_source_location: bool,
    /// Rendering used by the panic hook
    pub panic_format: PanicFormat,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.with_timestamps = enabled;
        self
    }

    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.with_source_location = enabled;
        self
    }

    pub fn with_panic_format(mut self, format: PanicFormat) -> Self {
        self.panic_format = format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.level.as_directive())
        }
    }
}

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Installs the panic hook and a global stderr subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. The panic hook is
/// installed even when the subscriber is not, and keeps whichever format was
/// installed first.
///
/// # Examples
///
/// ```no_run
/// use must::logging::{init_logging, LoggingConfig, PanicFormat};
///
/// init_logging(LoggingConfig::new().with_panic_format(PanicFormat::Json))
///     .expect("subscriber already installed");
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    install_panic_hook(config.panic_format);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_file(config.with_source_location)
        .with_line_number(config.with_source_location);

    let result = if config.with_timestamps {
        subscriber.try_init()
    } else {
        subscriber.without_time().try_init()
    };
    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Initialize logging with default configuration.
pub fn init_default_logging() -> Result<(), LoggingError> {
    init_logging(LoggingConfig::default())
}

/// How the panic hook renders must-failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanicFormat {
    /// `panicked at <location>:` followed by the error and its causes
    #[default]
    Text,
    /// One JSON object per failure, see [`crate::PanicReport`]
    Json,
}

static PANIC_HOOK: Once = Once::new();

/// Installs a panic hook that renders [`KnownError`] payloads.
///
/// Other payloads go to the previously installed hook. Only the first call
/// in a process has any effect.
pub fn install_panic_hook(format: PanicFormat) {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            match info.payload().downcast_ref::<KnownError>() {
                Some(err) => eprintln!("{}", render_panic(err, info.location(), format)),
                None => previous(info),
            }
        }));
    });
}

/// Renders a must-failure the way the panic hook prints it.
pub fn render_panic(
    err: &KnownError,
    location: Option<&Location<'_>>,
    format: PanicFormat,
) -> String {
    let location = location
        .map(|l| l.to_string())
        .unwrap_or_else(|| "<unknown>".to_string());

    match format {
        PanicFormat::Text => {
            let mut out = format!("panicked at {location}:\n{err}");
            for cause in err.chain().skip(1) {
                out.push_str(&format!("\n  caused by: {cause}"));
            }
            out
        }
        PanicFormat::Json => {
            let mut value = serde_json::to_value(err.report()).unwrap_or_default();
            if let serde_json::Value::Object(map) = &mut value {
                map.insert("location".to_string(), serde_json::Value::String(location));
            }
            value.to_string()
        }
    }
}
