//! clipswap - relink NLE project clips to finished media
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod interact;
pub mod logging;
pub mod matcher;
pub mod pool;
pub mod project;
pub mod relink;
