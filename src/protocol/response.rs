//! Response definitions
//!
//! Represents server replies and how they are classified for display.

use std::fmt;

use super::Value;

/// Response status as written by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "ERROR",
        }
    }

    fn from_wire(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "OK" => Some(Status::Ok),
            "ERROR" => Some(Status::Error),
            _ => None,
        }
    }
}

/// A decoded server reply
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// `status: OK`, with whichever payload fields were present
    Ok {
        message: Option<Value>,
        value: Option<Value>,
    },

    /// `status: ERROR`
    Error { message: Option<Value> },

    /// Missing or unrecognized status; the raw reply is kept for display
    Unexpected(Value),
}

impl Response {
    /// Create an OK response carrying a message
    pub fn ok_message(message: impl Into<String>) -> Self {
        Response::Ok {
            message: Some(Value::Str(message.into())),
            value: None,
        }
    }

    /// Create an OK response carrying a value
    pub fn ok_value(value: impl Into<Value>) -> Self {
        Response::Ok {
            message: None,
            value: Some(value.into()),
        }
    }

    /// Create a bare OK response
    pub fn ok() -> Self {
        Response::Ok {
            message: None,
            value: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: Some(Value::Str(message.into())),
        }
    }

    /// Classify a decoded map by its `status` field
    pub fn from_value(raw: Value) -> Self {
        match raw.get("status").and_then(Status::from_wire) {
            Some(Status::Ok) => Response::Ok {
                message: raw.get("message").cloned(),
                value: raw.get("value").cloned(),
            },
            Some(Status::Error) => Response::Error {
                message: raw.get("message").cloned(),
            },
            None => Response::Unexpected(raw),
        }
    }

    /// Wire representation of this response
    pub fn to_value(&self) -> Value {
        match self {
            Response::Ok { message, value } => {
                let mut entries = vec![("status", Value::from(Status::Ok.as_str()))];
                if let Some(message) = message {
                    entries.push(("message", message.clone()));
                }
                if let Some(value) = value {
                    entries.push(("value", value.clone()));
                }
                Value::map(entries)
            }
            Response::Error { message } => {
                let mut entries = vec![("status", Value::from(Status::Error.as_str()))];
                if let Some(message) = message {
                    entries.push(("message", message.clone()));
                }
                Value::map(entries)
            }
            Response::Unexpected(raw) => raw.clone(),
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Response::Ok { .. } => Some(Status::Ok),
            Response::Error { .. } => Some(Status::Error),
            Response::Unexpected(_) => None,
        }
    }
}

/// What the user is shown for a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// OK with a non-empty message
    Message(String),

    /// OK with no message but a non-empty value
    Value(String),

    /// OK with neither
    Ack,

    /// Server-reported failure
    ServerError(Option<String>),

    /// Anything without a recognized status, rendered raw
    Unexpected(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Message(_) | Outcome::Value(_) | Outcome::Ack)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Message(text) | Outcome::Value(text) => write!(f, "Server: {}", text),
            Outcome::Ack => f.write_str("Server: OK"),
            Outcome::ServerError(Some(message)) => write!(f, "Server Error: {}", message),
            Outcome::ServerError(None) => f.write_str("Server Error:"),
            Outcome::Unexpected(raw) => write!(f, "Unexpected server response: {}", raw),
        }
    }
}

/// Classify a response for display.
///
/// On OK the message wins over the value, and the value over a bare
/// acknowledgement. An ERROR shows its message with no fallback.
pub fn interpret(response: &Response) -> Outcome {
    match response {
        Response::Ok { message, value } => {
            if let Some(text) = message.as_ref().and_then(Value::display_text) {
                Outcome::Message(text)
            } else if let Some(text) = value.as_ref().and_then(Value::display_text) {
                // Integers, zero included, are shown rather than treated as absent
                Outcome::Value(text)
            } else {
                Outcome::Ack
            }
        }
        Response::Error { message } => {
            let message = message.as_ref().filter(|m| !matches!(m, Value::Nil));
            Outcome::ServerError(message.map(|m| m.to_string()))
        }
        Response::Unexpected(raw) => Outcome::Unexpected(raw.to_string()),
    }
}
