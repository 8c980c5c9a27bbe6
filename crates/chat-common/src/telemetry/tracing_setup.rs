//! Tracing and logging setup
//!
//! Mapping errors reported by `DataMapper` and dispatch decisions made by the
//! gateway flow through the subscriber installed here.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Crates whose output `mapper_level` overrides
const MAPPER_TARGETS: [&str; 2] = ["chat_mapper", "chat_gateway"];

/// Subscriber options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: Level,
    /// Separate level for mapper and dispatcher output, e.g. `WARN` to keep
    /// per-field mapping errors while the rest of the client logs at `INFO`
    pub mapper_level: Option<Level>,
    pub json: bool,
    /// Log span open and close
    pub span_events: bool,
    pub file_line: bool,
    /// Print the emitting module next to each line
    pub targets: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            mapper_level: None,
            json: false,
            span_events: false,
            file_line: true,
            targets: true,
        }
    }
}

impl TracingConfig {
    /// Everything at debug, human readable
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            span_events: true,
            ..Self::default()
        }
    }

    /// JSON lines; unknown events and other debug chatter are dropped
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            mapper_level: Some(Level::WARN),
            json: true,
            span_events: false,
            file_line: false,
            targets: false,
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Filter directives used when `RUST_LOG` is absent
    fn directives(&self) -> String {
        let mut directives = self.level.to_string().to_lowercase();
        if let Some(level) = self.mapper_level {
            let level = level.to_string().to_lowercase();
            for target in MAPPER_TARGETS {
                directives.push_str(&format!(",{target}={level}"));
            }
        }
        directives
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn fmt_layer(config: &TracingConfig) -> BoxedLayer {
    let layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_target(config.targets)
        .with_span_events(config.span_events());

    if config.json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Install the global subscriber with the default options
///
/// # Panics
/// Panics if a global subscriber is already set.
pub fn init_tracing() {
    init_tracing_with_config(&TracingConfig::default());
}

/// Install the global subscriber
///
/// # Panics
/// Panics if a global subscriber is already set.
pub fn init_tracing_with_config(config: &TracingConfig) {
    tracing_subscriber::registry()
        .with(fmt_layer(config))
        .with(config.env_filter())
        .init();
}

/// Like `init_tracing`, but reports a second installation instead of panicking
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(&TracingConfig::default())
}

pub fn try_init_tracing_with_config(config: &TracingConfig) -> Result<(), TracingError> {
    tracing_subscriber::registry()
        .with(fmt_layer(config))
        .with(config.env_filter())
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
