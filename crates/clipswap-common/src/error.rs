//! Fatal error types used throughout clipswap.
//!
//! Every variant aborts the run. Per-clip problems that only skip one clip
//! are reported through diagnostics instead and never reach this type.

use std::path::PathBuf;

/// Fatal error type for clipswap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project file does not exist or is not a regular file.
    #[error("Cannot find project file {0}")]
    ProjectNotFound(PathBuf),

    /// The finals directory does not exist or is not a directory.
    #[error("Finals directory {0} not found")]
    FinalsDirNotFound(PathBuf),

    /// The finals directory has no entries to choose from.
    #[error("No final files found in {0}")]
    EmptyFinalsDir(PathBuf),

    /// The project file could not be parsed as XML.
    #[error("Invalid project file: {0}")]
    InvalidProject(String),

    /// A clip's file reference is missing a required field.
    #[error("Malformed clip file reference: {0}")]
    MalformedClip(String),

    /// A replacement chosen from the finals directory is not on disk.
    #[error("Replacement path {0} should exist but doesn't")]
    MissingReplacement(PathBuf),

    /// The document root is neither `xmeml` nor `PremiereData`.
    #[error("Unrecognized project format: root element <{0}>")]
    UnrecognizedFormat(String),

    /// The operator declined to overwrite an existing output file.
    #[error("Output file {0} already exists, not overwriting")]
    OverwriteDeclined(PathBuf),

    /// The configuration file is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidProject error.
    pub fn invalid_project<S: Into<String>>(msg: S) -> Self {
        Self::InvalidProject(msg.into())
    }

    /// Create a new MalformedClip error.
    pub fn malformed_clip<S: Into<String>>(msg: S) -> Self {
        Self::MalformedClip(msg.into())
    }

    /// Create a new InvalidConfig error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
