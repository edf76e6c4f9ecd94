//! # clipswap-common
//!
//! Shared types for clipswap.
//!
//! This crate provides:
//! - A unified fatal error type ([`Error`])
//! - Path utilities for output naming and project-relative media paths

pub mod error;
pub mod paths;

pub use error::{Error, Result};
