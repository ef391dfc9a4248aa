// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol.
//!
//! One exchange per connection, all integers 32-bit big-endian:
//!
//! 1. client sends `N`, the payload length
//! 2. client sends `N` payload bytes
//! 3. server replies with `C`, the number of printable bytes in the payload

use count_printable::ByteFrequencyTable;
use std::io::ErrorKind;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Transfer buffer size.
pub const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("stream ended after {received} of {expected} bytes")]
    Truncated { expected: u32, received: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Whether the peer went away, as opposed to a local failure.
    ///
    /// A server drops such a client and keeps serving others.
    pub fn is_connection_error(&self) -> bool {
        match self {
            ProtocolError::Truncated { .. } => true,
            ProtocolError::Io(e) => is_connection_error(e),
        }
    }
}

pub(crate) fn is_connection_error(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
            | ErrorKind::TimedOut
            | ErrorKind::UnexpectedEof
    )
}

pub async fn read_length<R: AsyncRead + Unpin>(reader: &mut R) -> Result<u32, ProtocolError> {
    Ok(reader.read_u32().await?)
}

pub async fn write_length<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: u32,
) -> Result<(), ProtocolError> {
    writer.write_u32(value).await?;
    Ok(())
}

/// Read exactly `len` bytes, tallying printable ones into `table`.
///
/// Returns the number of printable bytes read.
pub async fn count_stream<R: AsyncRead + Unpin>(
    reader: &mut R,
    len: u32,
    table: &mut ByteFrequencyTable,
) -> Result<u32, ProtocolError> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut received: u32 = 0;
    let mut printable: u64 = 0;

    while received < len {
        let want = CHUNK_SIZE.min((len - received) as usize);
        let n = reader.read(&mut buf[..want]).await?;
        if n == 0 {
            return Err(ProtocolError::Truncated {
                expected: len,
                received,
            });
        }
        printable += table.add_bytes(&buf[..n]);
        received += n as u32;
    }

    // Bounded by `len`.
    Ok(printable as u32)
}

/// Copy exactly `len` bytes from `reader` to `writer` in `CHUNK_SIZE` pieces.
pub async fn send_stream<R, W>(reader: &mut R, writer: &mut W, len: u32) -> Result<(), ProtocolError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut sent: u32 = 0;

    while sent < len {
        let want = CHUNK_SIZE.min((len - sent) as usize);
        let n = reader.read(&mut buf[..want]).await?;
        if n == 0 {
            return Err(ProtocolError::Truncated {
                expected: len,
                received: sent,
            });
        }
        writer.write_all(&buf[..n]).await?;
        sent += n as u32;
    }
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
