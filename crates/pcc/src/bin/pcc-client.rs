// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pcc-client binary entry point.

use clap::Parser;

use pcc::cli::ClientCli;
use pcc::send_file;
use pcc_common::{exit_codes, print_error};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = ClientCli::parse();

    match send_file(cli.server_addr(), &cli.path).await {
        Ok(printable) => println!("# of printable characters: {}", printable),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
