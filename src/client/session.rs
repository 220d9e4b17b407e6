//! Interactive Session
//!
//! Turns one line of user input into something to print.

use std::fmt;
use std::io::{Read, Write};
use std::time::Duration;

use crate::error::{ParseError, QuillError};
use crate::protocol::{interpret, parse, Outcome};
use super::Connection;

/// Result of processing one non-blank input line
#[derive(Debug)]
pub enum LineOutcome {
    /// The server answered
    Reply { outcome: Outcome, latency: Duration },

    /// The line did not parse; nothing was sent
    InvalidInput(ParseError),

    /// Sending, receiving or decoding failed for this command
    CommunicationError(QuillError),
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineOutcome::Reply { outcome, latency } => {
                writeln!(f, "{}", outcome)?;
                write!(f, "Response time: {} ms", latency.as_millis())
            }
            LineOutcome::InvalidInput(e) => write!(f, "Error: {}", e),
            LineOutcome::CommunicationError(e) => {
                write!(f, "Error communicating with server: {}", e)
            }
        }
    }
}

/// Drives one connection from user input lines
pub struct Session<S> {
    connection: Connection<S>,
}

impl<S: Read + Write> Session<S> {
    pub fn new(connection: Connection<S>) -> Self {
        Self { connection }
    }

    /// Process one input line.
    ///
    /// Returns `None` for a blank line. Every error is folded into the
    /// returned outcome so the caller can keep reading lines.
    pub fn handle_line(&mut self, line: &str) -> Option<LineOutcome> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match parse(line) {
            Ok(command) => command,
            Err(e) => return Some(LineOutcome::InvalidInput(e)),
        };

        let outcome = match self.connection.round_trip(&command) {
            Ok((response, latency)) => LineOutcome::Reply {
                outcome: interpret(&response),
                latency,
            },
            Err(e) => {
                tracing::warn!(
                    "{} to {} failed: {}",
                    command.command_type(),
                    self.connection.peer_addr(),
                    e
                );
                LineOutcome::CommunicationError(e)
            }
        };

        Some(outcome)
    }

    pub fn connection(&self) -> &Connection<S> {
        &self.connection
    }

    pub fn into_connection(self) -> Connection<S> {
        self.connection
    }
}
