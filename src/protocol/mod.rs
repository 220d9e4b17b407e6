//! Protocol Module
//!
//! Defines the request/response cycle between the client and server.
//!
//! ## Flow
//! ```text
//! line ──parse──▶ Command ──encode──▶ bytes ──▶ server
//!                                                  │
//! Outcome ◀──interpret── Response ◀──decode── bytes
//! ```
//!
//! ### Commands
//! - PING                          - no arguments
//! - ECHO <message...>             - remaining tokens joined by spaces
//! - SET <key> <value> [expiry]    - expiry is a base-10 integer
//! - GET <key>
//! - INCR <key> <offset>           - offset passed through as text
//! - PUSH <key> <value>
//! - LPOP <key> / RPOP <key>
//! - FLUSHDB                       - no arguments
//!
//! ### Status Codes
//! - OK:    optional `message` and/or `value`
//! - ERROR: `message` describes the failure
//! - anything else is an unexpected response

mod command;
mod parser;
mod value;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use parser::{parse, tokenize};
pub use value::Value;
pub use response::{interpret, Outcome, Response, Status};
pub use codec::{
    decode_command, decode_response, decode_value, encode_command, encode_response,
    write_command, write_response,
};
