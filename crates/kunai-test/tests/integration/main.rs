//! Cross-crate integration tests for the Kunai vCard tooling.

mod cli;
mod helpers;
mod import;
mod round_trip;
