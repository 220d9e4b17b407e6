//! Protocol Tests
//!
//! Parser, codec and response interpretation.
