// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments for the client and server binaries.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Printable character counting server
#[derive(Parser, Debug)]
#[command(name = "pcc-server", version)]
#[command(about = "Count printable characters sent by clients; print totals on Ctrl+C")]
pub struct ServerCli {
    /// TCP port to listen on
    pub port: u16,

    /// Report the listening address and each client on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerCli {
    /// Listen on every local interface.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// Printable character counting client
#[derive(Parser, Debug)]
#[command(name = "pcc-client", version)]
#[command(about = "Send a file to a pcc-server and print its printable character count")]
pub struct ClientCli {
    /// Server IP address
    pub server_ip: IpAddr,

    /// Server port
    pub port: u16,

    /// File to send
    pub path: PathBuf,
}

impl ClientCli {
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_ip, self.port)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
