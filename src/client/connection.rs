//! Server Connection
//!
//! Owns the transport stream and performs one request/response exchange
//! at a time.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{QuillError, Result};
use crate::protocol::{decode_response, write_command, Command, Response};

/// A connection to the server over any byte stream
pub struct Connection<S> {
    /// Transport stream (a TcpStream outside of tests)
    stream: S,

    /// Receive buffer, sized once from the config
    buffer: BytesMut,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection<TcpStream> {
    /// Connect to the configured server address
    ///
    /// Sets TCP_NODELAY and any configured timeouts
    pub fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let stream = TcpStream::connect(&config.server_addr)?;
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| config.server_addr.clone());

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self::with_stream(stream, peer_addr, config.recv_buffer_size))
    }

    /// A second handle to the socket, used to shut it down on interrupt
    pub fn try_clone_stream(&self) -> Result<TcpStream> {
        Ok(self.stream.try_clone()?)
    }
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an already-open stream
    pub fn with_stream(stream: S, peer_addr: impl Into<String>, recv_buffer_size: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::zeroed(recv_buffer_size),
            peer_addr: peer_addr.into(),
        }
    }

    /// Encode and send one command
    pub fn send(&mut self, command: &Command) -> Result<()> {
        tracing::debug!("Sending to {}: {:?}", self.peer_addr, command);
        let written = write_command(&mut self.stream, command)?;
        tracing::trace!("Wrote {} bytes to {}", written, self.peer_addr);
        Ok(())
    }

    /// Receive one response with a single bounded read
    pub fn receive(&mut self) -> Result<Response> {
        let read = self.stream.read(&mut self.buffer[..])?;
        if read == 0 {
            return Err(QuillError::Network(format!(
                "connection closed by {}",
                self.peer_addr
            )));
        }

        tracing::trace!("Read {} bytes from {}", read, self.peer_addr);
        if read == self.buffer.len() {
            tracing::warn!(
                "Response from {} filled the {} byte receive buffer and may be truncated",
                self.peer_addr,
                self.buffer.len()
            );
        }

        let response = decode_response(&self.buffer[..read])?;
        tracing::debug!("Received from {}: {:?}", self.peer_addr, response);
        Ok(response)
    }

    /// Send a command and wait for its response.
    ///
    /// The returned latency covers exactly the send and the receive.
    pub fn round_trip(&mut self, command: &Command) -> Result<(Response, Duration)> {
        let start = Instant::now();
        self.send(command)?;
        let response = self.receive()?;
        Ok((response, start.elapsed()))
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Consume the connection, returning the stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}
