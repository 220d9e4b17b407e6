//! Shared test helpers

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use quillkv::protocol::{encode_response, Response};

/// An in-memory stream that hands out one scripted chunk per read and
/// records everything written to it.
#[derive(Default)]
pub struct ScriptedStream {
    pub replies: VecDeque<Vec<u8>>,
    pub written: Vec<u8>,
    pub fail_writes: bool,
}

impl ScriptedStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an encoded response for the next read
    pub fn reply(mut self, response: &Response) -> Self {
        self.replies.push_back(encode_response(response).unwrap());
        self
    }

    /// Queue raw bytes for the next read
    pub fn reply_raw(mut self, bytes: &[u8]) -> Self {
        self.replies.push_back(bytes.to_vec());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // An empty script looks like a closed peer
        let Some(chunk) = self.replies.pop_front() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        Ok(n)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
