//! Configuration for QuillKV
//!
//! Centralized client configuration with sensible defaults.

use crate::error::{QuillError, Result};

/// Default size of the single bounded read used to receive a response.
///
/// A response larger than this is truncated by the read and fails to decode.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 4096;

/// Main configuration for a QuillKV client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub server_addr: String,

    /// Bytes requested by the one read performed per response
    pub recv_buffer_size: usize,

    /// Response read timeout (milliseconds, 0 blocks indefinitely)
    pub read_timeout_ms: u64,

    /// Request write timeout (milliseconds, 0 blocks indefinitely)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Interactive Configuration
    // -------------------------------------------------------------------------
    /// Prompt printed before each input line
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:6379".to_string(),
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            prompt: ">> ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the values that would otherwise fail later at connect or read time
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.trim().is_empty() {
            return Err(QuillError::Config("server address is empty".to_string()));
        }
        if self.recv_buffer_size == 0 {
            return Err(QuillError::Config(
                "receive buffer size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the server address from a host and port pair
    pub fn host_port(mut self, host: &str, port: u16) -> Self {
        self.config.server_addr = format!("{}:{}", host, port);
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the interactive prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
