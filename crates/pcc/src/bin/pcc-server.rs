// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pcc-server binary entry point.

use std::io::Write;

use clap::Parser;

use pcc::cli::ServerCli;
use pcc::server::interrupt;
use pcc::Server;
use pcc_common::{exit_codes, print_error, print_info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = ServerCli::parse();

    let server = match Server::bind(cli.listen_addr()).await {
        Ok(server) => server.with_verbose(cli.verbose),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    };

    let shutdown = match interrupt() {
        Ok(shutdown) => shutdown,
        Err(e) => {
            print_error(format_args!("failed to install interrupt handler: {}", e));
            std::process::exit(exit_codes::FAILURE);
        }
    };

    if cli.verbose {
        if let Ok(addr) = server.local_addr() {
            print_info("pcc-server", format_args!("listening on {}", addr));
        }
    }

    let total = match server.run(shutdown).await {
        Ok(total) => total,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    };

    let written = {
        let mut stdout = std::io::stdout().lock();
        total.write_table(&mut stdout).and_then(|()| stdout.flush())
    };
    if let Err(e) = written {
        print_error(format_args!("failed to write totals: {}", e));
        std::process::exit(exit_codes::FAILURE);
    }
}
