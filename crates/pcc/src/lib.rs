// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Printable character counting over TCP.
//!
//! A client streams a file to the server, which replies with the number of
//! printable ASCII bytes it saw. The server keeps a running per-character
//! total across clients and prints it in the `count-printable` format when
//! interrupted, so its output can be checked with `compare-counts`.

pub mod cli;
pub mod client;
pub mod protocol;
pub mod server;

pub use client::{send_file, ClientError};
pub use protocol::ProtocolError;
pub use server::{Server, ServerError};
