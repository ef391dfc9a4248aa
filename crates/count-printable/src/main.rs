// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! count-printable binary entry point.

use std::io::Write;

use clap::Parser;

use count_printable::cli::Cli;
use count_printable::count_files;
use pcc_common::{exit_codes, print_error, print_info};

fn main() {
    let cli = Cli::parse();

    let table = match count_files(&cli.paths) {
        Ok(table) => table,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    };

    if cli.verbose {
        print_info(
            "count-printable",
            format_args!(
                "{} printable characters in {} files",
                table.total(),
                cli.paths.len()
            ),
        );
    }

    let written = {
        let mut stdout = std::io::stdout().lock();
        table.write_table(&mut stdout).and_then(|()| stdout.flush())
    };
    if let Err(e) = written {
        print_error(format_args!("failed to write table: {}", e));
        std::process::exit(exit_codes::FAILURE);
    }
}
