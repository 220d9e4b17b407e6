//! Connection Tests
//!
//! Tests for the send/receive cycle over a scripted stream.

use quillkv::protocol::{decode_command, parse, Response};
use quillkv::{Connection, QuillError};

use super::common::ScriptedStream;

#[test]
fn test_round_trip_sends_encoded_command() {
    let stream = ScriptedStream::new().reply(&Response::ok_message("PONG"));
    let mut conn = Connection::with_stream(stream, "test", 4096);

    let cmd = parse("PING").unwrap();
    let (response, _latency) = conn.round_trip(&cmd).unwrap();
    assert_eq!(response, Response::ok_message("PONG"));

    let stream = conn.into_inner();
    assert_eq!(decode_command(&stream.written).unwrap(), cmd);
}

#[test]
fn test_round_trip_one_response_per_command() {
    let stream = ScriptedStream::new()
        .reply(&Response::ok())
        .reply(&Response::ok_value("v"));
    let mut conn = Connection::with_stream(stream, "test", 4096);

    let (first, _) = conn.round_trip(&parse("SET k v").unwrap()).unwrap();
    let (second, _) = conn.round_trip(&parse("GET k").unwrap()).unwrap();

    assert_eq!(first, Response::ok());
    assert_eq!(second, Response::ok_value("v"));
}

#[test]
fn test_receive_closed_connection() {
    let mut conn = Connection::with_stream(ScriptedStream::new(), "test", 4096);
    let result = conn.round_trip(&parse("PING").unwrap());
    assert!(matches!(result, Err(QuillError::Network(_))));
}

#[test]
fn test_receive_oversized_response_fails_to_decode() {
    let long = "x".repeat(100);
    let stream = ScriptedStream::new().reply(&Response::ok_value(long.as_str()));
    let mut conn = Connection::with_stream(stream, "test", 32);

    let result = conn.receive();
    assert!(matches!(result, Err(QuillError::Protocol(_))));
}

#[test]
fn test_send_failure_is_io_error() {
    let stream = ScriptedStream::new().failing_writes();
    let mut conn = Connection::with_stream(stream, "test", 4096);

    let result = conn.send(&parse("PING").unwrap());
    assert!(matches!(result, Err(QuillError::Io(_))));
}
