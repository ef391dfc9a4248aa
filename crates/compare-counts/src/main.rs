// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! compare-counts binary entry point.

use std::io::Write;

use clap::Parser;

use compare_counts::cli::Cli;
use compare_counts::compare_files;
use pcc_common::{exit_codes, print_error, print_info};

fn main() {
    let cli = Cli::parse();

    let comparison = match compare_files(&cli.expected, &cli.actual) {
        Ok(comparison) => comparison,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::IO_ERROR);
        }
    };

    if cli.verbose {
        match comparison.length_mismatch() {
            Some((a, b)) => print_info("compare-counts", format_args!("{} vs {} lines", a, b)),
            None => print_info(
                "compare-counts",
                format_args!("{} differing lines", comparison.differences().len()),
            ),
        }
    }

    let written = {
        let mut stdout = std::io::stdout().lock();
        comparison
            .write_report(&mut stdout)
            .and_then(|()| stdout.flush())
    };
    if let Err(e) = written {
        print_error(format_args!("failed to write report: {}", e));
        std::process::exit(exit_codes::FAILURE);
    }

    std::process::exit(comparison.verdict().exit_code());
}
