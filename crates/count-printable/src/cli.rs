// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Count printable ASCII characters across files
#[derive(Parser, Debug)]
#[command(name = "count-printable", version)]
#[command(about = "Print how often each printable ASCII character appears")]
pub struct Cli {
    /// Files to count (totals are combined)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Print the number of counted characters to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
