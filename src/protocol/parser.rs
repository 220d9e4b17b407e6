//! Command line parser
//!
//! Splits one line of user input into tokens and validates it into a
//! [`Command`].
//!
//! ## Tokenizing rules
//! - `"` toggles quoting; closing a quote always emits a token, so `""`
//!   is an explicit empty argument
//! - an unquoted space ends the current token; runs of spaces collapse
//! - the line must end outside quotes

use crate::error::ParseError;
use super::{Command, CommandType};

/// Split a line into tokens, honoring double-quote grouping
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    if in_quotes {
        return Err(ParseError::UnmatchedQuotes);
    }

    Ok(tokens)
}

/// Parse a line into a validated command
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line)?;
    let (name, args) = tokens.split_first().ok_or(ParseError::NoCommand)?;
    let command_type: CommandType = name.parse()?;

    build_command(command_type, args)
}

/// Apply the command's arity rule and pick out its fields.
///
/// PING and FLUSHDB reject extra arguments; every other command only
/// enforces a minimum and ignores trailing tokens.
fn build_command(command_type: CommandType, args: &[String]) -> Result<Command, ParseError> {
    let require = |min: usize, usage: &'static str| {
        if args.len() < min {
            Err(ParseError::MissingArguments {
                command: command_type.name(),
                usage,
            })
        } else {
            Ok(())
        }
    };

    let command = match command_type {
        CommandType::Ping => {
            reject_arguments(command_type, args)?;
            Command::Ping
        }
        CommandType::FlushDb => {
            reject_arguments(command_type, args)?;
            Command::FlushDb
        }
        CommandType::Echo => {
            require(1, "a message")?;
            Command::Echo {
                message: args.join(" "),
            }
        }
        CommandType::Set => {
            require(2, "a key, value, and optional expiry")?;
            let exp = match args.get(2) {
                Some(raw) => Some(parse_expiry(raw)?),
                None => None,
            };
            Command::Set {
                key: args[0].clone(),
                value: args[1].clone(),
                exp,
            }
        }
        CommandType::Get => {
            require(1, "a key")?;
            Command::Get { key: args[0].clone() }
        }
        CommandType::Incr => {
            require(2, "a key and offset")?;
            Command::Incr {
                key: args[0].clone(),
                offset: args[1].clone(),
            }
        }
        CommandType::Push => {
            require(2, "a key and value")?;
            Command::Push {
                key: args[0].clone(),
                value: args[1].clone(),
            }
        }
        CommandType::LPop => {
            require(1, "a key")?;
            Command::LPop { key: args[0].clone() }
        }
        CommandType::RPop => {
            require(1, "a key")?;
            Command::RPop { key: args[0].clone() }
        }
    };

    Ok(command)
}

fn reject_arguments(command_type: CommandType, args: &[String]) -> Result<(), ParseError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedArguments(command_type.name()))
    }
}

fn parse_expiry(raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>()
        .map_err(|_| ParseError::InvalidExpiry(raw.to_string()))
}
