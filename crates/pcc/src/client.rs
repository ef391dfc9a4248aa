// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Counting client.

use crate::protocol::{read_length, send_stream, write_length, ProtocolError};
use pcc_common::SourceError;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use tokio::fs::File;
use tokio::net::TcpStream;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("file is {0} bytes, the protocol allows at most 4294967295")]
    TooLarge(u64),

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("transfer failed: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Send the file at `path` to the server at `addr`.
///
/// The file is opened before connecting. Returns the server's count of
/// printable characters.
pub async fn send_file(addr: SocketAddr, path: &Path) -> Result<u32, ClientError> {
    let mut file = File::open(path)
        .await
        .map_err(|e| SourceError::new(path, e))?;
    let size = file
        .metadata()
        .await
        .map_err(|e| SourceError::new(path, e))?
        .len();
    let len = u32::try_from(size).map_err(|_| ClientError::TooLarge(size))?;

    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| ClientError::Connect { addr, source })?;

    write_length(&mut stream, len).await?;
    send_stream(&mut file, &mut stream, len).await?;
    Ok(read_length(&mut stream).await?)
}
