//! Client Module
//!
//! Sessions with the payment client.
//!
//! ## Model
//! - One TCP connection per transaction
//! - Blocking I/O on the caller's thread
//! - No retries: a transport failure ends the transaction

mod session;
mod transport;

pub use session::Session;
pub use transport::{connect, Transport};
