//! Command-line front end for the Kunai vCard codec.

pub mod command;
pub mod config;
pub mod error;
pub mod import;
