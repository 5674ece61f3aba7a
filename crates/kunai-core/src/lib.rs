//! Shared configuration, error types and small utilities for the Kunai workspace.

pub mod config;
pub mod error;
pub mod util;
