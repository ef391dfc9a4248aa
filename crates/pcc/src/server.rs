// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential counting server.
//!
//! Clients are served one at a time. A client's counts join the running
//! total only after its reply has been sent, so a client that disconnects
//! part way contributes nothing. Shutdown is only observed between clients.

use crate::protocol::{self, count_stream, read_length, write_length, ProtocolError};
use count_printable::ByteFrequencyTable;
use pcc_common::{print_info, print_warning};
use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};

const TOOL: &str = "pcc-server";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    #[error("failed to serve client {peer}: {source}")]
    Client {
        peer: SocketAddr,
        #[source]
        source: ProtocolError,
    },

    #[error("failed to wait for interrupt: {0}")]
    Signal(#[source] std::io::Error),
}

pub struct Server {
    listener: TcpListener,
    total: ByteFrequencyTable,
    verbose: bool,
}

impl Server {
    pub async fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self {
            listener,
            total: ByteFrequencyTable::new(),
            verbose: false,
        })
    }

    /// Report each client on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve clients until `shutdown` resolves, then return the running total.
    ///
    /// A client already accepted when `shutdown` fires is served to completion.
    pub async fn run<F>(mut self, shutdown: F) -> Result<ByteFrequencyTable, ServerError>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                biased;
                signal = &mut shutdown => {
                    signal.map_err(ServerError::Signal)?;
                    break;
                }
                accepted = self.listener.accept() => accepted,
            };

            match accepted {
                Ok((mut stream, peer)) => self.handle(&mut stream, peer).await?,
                Err(e) if protocol::is_connection_error(&e) => {
                    print_warning(format_args!("failed to accept connection: {}", e));
                }
                Err(e) => return Err(ServerError::Accept(e)),
            }
        }

        Ok(self.total)
    }

    async fn handle(&mut self, stream: &mut TcpStream, peer: SocketAddr) -> Result<(), ServerError> {
        match serve_client(stream).await {
            Ok((printable, counts)) => {
                self.total.merge(&counts);
                if self.verbose {
                    print_info(
                        TOOL,
                        format_args!("{}: {} printable characters", peer, printable),
                    );
                }
                Ok(())
            }
            Err(e) if e.is_connection_error() => {
                print_warning(format_args!("dropped client {}: {}", peer, e));
                Ok(())
            }
            Err(source) => Err(ServerError::Client { peer, source }),
        }
    }
}

/// Future that resolves on the first SIGINT (Ctrl+C).
///
/// The handler is installed before this returns, so an interrupt that
/// arrives before the future is first polled is still observed.
#[cfg(unix)]
pub fn interrupt() -> std::io::Result<impl Future<Output = std::io::Result<()>>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        sigint.recv().await;
        Ok(())
    })
}

#[cfg(not(unix))]
pub fn interrupt() -> std::io::Result<impl Future<Output = std::io::Result<()>>> {
    Ok(tokio::signal::ctrl_c())
}

/// Run one exchange, returning the reply sent and the client's counts.
pub async fn serve_client(
    stream: &mut TcpStream,
) -> Result<(u32, ByteFrequencyTable), ProtocolError> {
    let len = read_length(stream).await?;
    let mut counts = ByteFrequencyTable::new();
    let printable = count_stream(stream, len, &mut counts).await?;
    write_length(stream, printable).await?;
    Ok((printable, counts))
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
