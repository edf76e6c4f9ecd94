use serde::{Deserialize, Serialize};

use clipswap_common::paths::DEFAULT_OUTPUT_SUFFIX;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub prompts: PromptConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub premiere: PremiereConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log level when neither `--log` nor `RUST_LOG` is given
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    /// Answer yes to every confirmation prompt
    #[serde(default)]
    pub assume_yes: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Inserted between stem and extension when `--output` is not given
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PremiereConfig {
    /// Let several Media entries match the same replacement file
    #[serde(default = "default_true")]
    pub allow_candidate_reuse: bool,

    /// Rename echo nodes even if some Media path fields were missing
    #[serde(default = "default_true")]
    pub propagate_partial_updates: bool,

    /// gzip the output again when the input project was gzipped
    #[serde(default = "default_true")]
    pub recompress: bool,
}

impl Default for PremiereConfig {
    fn default() -> Self {
        Self {
            allow_candidate_reuse: true,
            propagate_partial_updates: true,
            recompress: true,
        }
    }
}

fn default_true() -> bool {
    true
}
