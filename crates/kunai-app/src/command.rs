//! Command-line argument handling.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kunai")]
#[command(version, about = "Split, parse and normalize vCard files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the cards found in a vCard file
    Split {
        /// vCard file to read
        file: PathBuf,
    },

    /// Print every card as JSON
    Parse {
        /// vCard file to read
        file: PathBuf,
    },

    /// Re-serialize every card to canonical vCard text
    Normalize {
        /// vCard file to read
        file: PathBuf,
    },
}

impl Command {
    /// The input file.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Split { file } | Self::Parse { file } | Self::Normalize { file } => file,
        }
    }
}
