//! # QuillKV
//!
//! An interactive command-line client for a key-value server that speaks
//! MessagePack maps over TCP:
//! - Shell-like command parsing with double-quote grouping
//! - Per-command arity and type validation
//! - Compact binary request/response encoding
//! - Deterministic classification of server replies
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Prompt                        │
//! │                   (one line at a time)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Parser                              │
//! │            (tokenize, validate, Command)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Codec                                    │
//! │          (MessagePack map encode / decode)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Connection  │          │ Interpreter │
//!   │   (TCP)     │          │  (Outcome)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ParseError, QuillError, Result};
pub use config::Config;
pub use client::{Connection, LineOutcome, Session};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of QuillKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
