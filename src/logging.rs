//! Log level selection and subscriber setup.

use clap::ValueEnum;

/// Severity names accepted by `--log` and `logging.level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Parse a level name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    /// `tracing` filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Output goes to stderr so prompts and dry-run listings on stdout stay
/// readable.
pub fn init_logging(level: LogLevel) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        let level = level.directive();
        format!(
            "clipswap={0},clipswap_xml={0},clipswap_common={0}",
            level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
