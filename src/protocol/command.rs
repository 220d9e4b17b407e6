//! Command definitions
//!
//! Represents requests sent to the server.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ParseError;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Ping,
    Echo,
    Set,
    Get,
    Incr,
    Push,
    LPop,
    RPop,
    FlushDb,
}

impl CommandType {
    /// Every command the client knows, in help order
    pub const ALL: [CommandType; 9] = [
        CommandType::Ping,
        CommandType::Echo,
        CommandType::Set,
        CommandType::Get,
        CommandType::Incr,
        CommandType::Push,
        CommandType::LPop,
        CommandType::RPop,
        CommandType::FlushDb,
    ];

    /// Canonical (upper case) wire name
    pub fn name(self) -> &'static str {
        match self {
            CommandType::Ping => "PING",
            CommandType::Echo => "ECHO",
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Incr => "INCR",
            CommandType::Push => "PUSH",
            CommandType::LPop => "LPOP",
            CommandType::RPop => "RPOP",
            CommandType::FlushDb => "FLUSHDB",
        }
    }

    /// Usage line shown in the interactive help
    pub fn usage(self) -> &'static str {
        match self {
            CommandType::Ping => "PING",
            CommandType::Echo => "ECHO <message...>",
            CommandType::Set => "SET <key> <value> [expiry]",
            CommandType::Get => "GET <key>",
            CommandType::Incr => "INCR <key> <offset>",
            CommandType::Push => "PUSH <key> <value>",
            CommandType::LPop => "LPOP <key>",
            CommandType::RPop => "RPOP <key>",
            CommandType::FlushDb => "FLUSHDB",
        }
    }
}

impl FromStr for CommandType {
    type Err = ParseError;

    /// Case-insensitive lookup of a command name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        CommandType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == upper)
            .ok_or(ParseError::UnknownCommand(upper))
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated request, one variant per command.
///
/// On the wire this is a MessagePack map holding `command` plus the
/// variant's fields, under the same names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Health check
    Ping,

    /// Echo a message back
    Echo { message: String },

    /// Set a key, with an optional expiry
    Set {
        key: String,
        value: String,
        exp: Option<i64>,
    },

    /// Get a value by key
    Get { key: String },

    /// Increment a counter; the offset is interpreted by the server
    Incr { key: String, offset: String },

    /// Append to a list
    Push { key: String, value: String },

    /// Pop from the head of a list
    LPop { key: String },

    /// Pop from the tail of a list
    RPop { key: String },

    /// Drop every key
    FlushDb,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Ping => CommandType::Ping,
            Command::Echo { .. } => CommandType::Echo,
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Incr { .. } => CommandType::Incr,
            Command::Push { .. } => CommandType::Push,
            Command::LPop { .. } => CommandType::LPop,
            Command::RPop { .. } => CommandType::RPop,
            Command::FlushDb => CommandType::FlushDb,
        }
    }

    /// The `(field, value)` pairs carried after `command`
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        match self {
            Command::Ping | Command::FlushDb => Vec::new(),
            Command::Echo { message } => vec![("message", FieldValue::Str(message))],
            Command::Set { key, value, exp } => {
                let mut fields = vec![("key", FieldValue::Str(key)), ("value", FieldValue::Str(value))];
                if let Some(exp) = exp {
                    fields.push(("exp", FieldValue::Int(*exp)));
                }
                fields
            }
            Command::Get { key } | Command::LPop { key } | Command::RPop { key } => {
                vec![("key", FieldValue::Str(key))]
            }
            Command::Incr { key, offset } => {
                vec![("key", FieldValue::Str(key)), ("offset", FieldValue::Str(offset))]
            }
            Command::Push { key, value } => {
                vec![("key", FieldValue::Str(key)), ("value", FieldValue::Str(value))]
            }
        }
    }
}

enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("command", self.command_type().name())?;
        for (name, value) in &fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
