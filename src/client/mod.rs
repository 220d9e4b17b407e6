//! Client Module
//!
//! TCP connection handling and the interactive session.
//!
//! ## Model
//! - One connection for the life of the process
//! - One outstanding request at a time
//! - Each response is received with a single bounded read

mod connection;
mod session;

pub use connection::Connection;
pub use session::{LineOutcome, Session};
