// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Compare two test outputs, ignoring blank lines and surrounding whitespace
#[derive(Parser, Debug)]
#[command(name = "compare-counts", version)]
#[command(about = "Compare two test outputs line by line")]
pub struct Cli {
    /// Expected output (reported with `-`)
    #[arg(value_name = "PATH_A")]
    pub expected: PathBuf,

    /// Actual output (reported with `+`)
    #[arg(value_name = "PATH_B")]
    pub actual: PathBuf,

    /// Print input sizes to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
