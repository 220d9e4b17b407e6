//! Session Tests
//!
//! Tests for turning input lines into printable outcomes.

use quillkv::protocol::{Outcome, Response, Value};
use quillkv::{Connection, LineOutcome, ParseError, Session};

use super::common::ScriptedStream;

fn session(stream: ScriptedStream) -> Session<ScriptedStream> {
    Session::new(Connection::with_stream(stream, "test", 4096))
}

#[test]
fn test_blank_line_is_ignored() {
    let mut session = session(ScriptedStream::new());
    assert!(session.handle_line("").is_none());
    assert!(session.handle_line("   \n").is_none());
}

#[test]
fn test_parse_error_sends_nothing() {
    let mut session = session(ScriptedStream::new());

    match session.handle_line("PING extra") {
        Some(LineOutcome::InvalidInput(ParseError::UnexpectedArguments("PING"))) => {}
        other => panic!("Expected invalid input, got {:?}", other),
    }

    let stream = session.into_connection().into_inner();
    assert!(stream.written.is_empty());
}

#[test]
fn test_parse_error_display() {
    let mut session = session(ScriptedStream::new());
    let outcome = session.handle_line("GET").unwrap();
    assert_eq!(outcome.to_string(), "Error: GET requires a key");
}

#[test]
fn test_reply_outcome() {
    let stream = ScriptedStream::new().reply(&Response::ok_message("PONG"));
    let mut session = session(stream);

    match session.handle_line("ping\n") {
        Some(LineOutcome::Reply { outcome, .. }) => {
            assert_eq!(outcome, Outcome::Message("PONG".to_string()))
        }
        other => panic!("Expected reply, got {:?}", other),
    }
}

#[test]
fn test_reply_display_includes_latency() {
    let stream = ScriptedStream::new().reply(&Response::ok());
    let mut session = session(stream);

    let rendered = session.handle_line("SET k v").unwrap().to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Server: OK"));
    let timing = lines.next().unwrap();
    assert!(timing.starts_with("Response time: "));
    assert!(timing.ends_with(" ms"));
}

#[test]
fn test_server_error_outcome() {
    let stream = ScriptedStream::new().reply(&Response::error("no such key"));
    let mut session = session(stream);

    match session.handle_line("GET missing") {
        Some(LineOutcome::Reply { outcome, .. }) => {
            assert_eq!(outcome, Outcome::ServerError(Some("no such key".to_string())))
        }
        other => panic!("Expected reply, got {:?}", other),
    }
}

#[test]
fn test_communication_error_keeps_session_usable() {
    let stream = ScriptedStream::new()
        .reply_raw(&[0xc1])
        .reply(&Response::ok_message("PONG"));
    let mut session = session(stream);

    let first = session.handle_line("PING").unwrap();
    assert!(matches!(first, LineOutcome::CommunicationError(_)));
    assert!(first
        .to_string()
        .starts_with("Error communicating with server: "));

    match session.handle_line("PING") {
        Some(LineOutcome::Reply { outcome, .. }) => assert!(outcome.is_success()),
        other => panic!("Expected reply, got {:?}", other),
    }
}

#[test]
fn test_unexpected_response_outcome() {
    let stream = ScriptedStream::new().reply_raw(&[0x81, 0xa6, b's', b't', b'a', b't', b'u', b's', 0xa3, b'W', b'A', b'T']);
    let mut session = session(stream);

    let rendered = session.handle_line("GET k").unwrap().to_string();
    assert!(rendered.starts_with("Unexpected server response: {status: WAT}"));
}

#[test]
fn test_ext_value_is_a_reply() {
    let stream = ScriptedStream::new().reply(&Response::Ok {
        message: None,
        value: Some(Value::Ext(1, vec![0x05])),
    });
    let mut session = session(stream);

    match session.handle_line("GET k") {
        Some(LineOutcome::Reply { outcome, .. }) => {
            assert_eq!(outcome, Outcome::Value("ext(1, 0x05)".to_string()))
        }
        other => panic!("Expected reply, got {:?}", other),
    }
    assert_eq!(session.connection().peer_addr(), "test");
}
