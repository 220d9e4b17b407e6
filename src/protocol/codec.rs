//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! Each request and each response is one MessagePack map with no framing
//! of its own:
//!
//! ```text
//! request:  {"command": "SET", "key": "k", "value": "v", "exp": 100}
//! response: {"status": "OK", "message": "...", "value": "..."}
//! ```
//!
//! The client receives a response with a single bounded read, so a reply
//! must fit in `Config::recv_buffer_size` bytes.

use std::io::Write;

use crate::error::{QuillError, Result};
use super::{Command, CommandType, Response, Value};

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to bytes
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    rmp_serde::to_vec(command).map_err(|e| QuillError::Serialization(e.to_string()))
}

/// Decode a command from bytes, as a server would
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let raw = decode_value(bytes)?;
    if raw.as_map().is_none() {
        return Err(QuillError::Protocol(format!(
            "Request is not a map: {}",
            raw
        )));
    }

    let name = raw
        .get("command")
        .and_then(Value::as_str)
        .ok_or_else(|| QuillError::Protocol("Invalid or missing 'command' field".to_string()))?;
    let command_type: CommandType = name
        .parse()
        .map_err(|e| QuillError::Protocol(format!("{}", e)))?;

    let command = match command_type {
        CommandType::Ping => Command::Ping,
        CommandType::FlushDb => Command::FlushDb,
        CommandType::Echo => Command::Echo {
            message: string_field(&raw, command_type, "message")?,
        },
        CommandType::Set => Command::Set {
            key: string_field(&raw, command_type, "key")?,
            value: string_field(&raw, command_type, "value")?,
            exp: match raw.get("exp") {
                Some(exp) => Some(exp.as_i64().ok_or_else(|| {
                    QuillError::Protocol(format!("SET: invalid type for 'exp': {}", exp))
                })?),
                None => None,
            },
        },
        CommandType::Get => Command::Get {
            key: string_field(&raw, command_type, "key")?,
        },
        CommandType::Incr => Command::Incr {
            key: string_field(&raw, command_type, "key")?,
            offset: string_field(&raw, command_type, "offset")?,
        },
        CommandType::Push => Command::Push {
            key: string_field(&raw, command_type, "key")?,
            value: string_field(&raw, command_type, "value")?,
        },
        CommandType::LPop => Command::LPop {
            key: string_field(&raw, command_type, "key")?,
        },
        CommandType::RPop => Command::RPop {
            key: string_field(&raw, command_type, "key")?,
        },
    };

    Ok(command)
}

fn string_field(raw: &Value, command_type: CommandType, field: &str) -> Result<String> {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            QuillError::Protocol(format!(
                "{} command: missing or non-string '{}' field",
                command_type, field
            ))
        })
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    rmp_serde::to_vec(&response.to_value()).map_err(|e| QuillError::Serialization(e.to_string()))
}

/// Decode a response from bytes.
///
/// Malformed or truncated bytes are a `Protocol` error. A well-formed
/// value without a recognized status decodes to `Response::Unexpected`.
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    decode_value(bytes).map(Response::from_value)
}

/// Decode exactly one MessagePack value from the front of `bytes`
pub fn decode_value(bytes: &[u8]) -> Result<Value> {
    if bytes.is_empty() {
        return Err(QuillError::Protocol("Empty payload".to_string()));
    }
    rmp_serde::from_slice(bytes).map_err(|e| QuillError::Protocol(format!("Malformed payload: {}", e)))
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<usize> {
    let bytes = encode_command(command)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<usize> {
    let bytes = encode_response(response)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}
