//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! <message id>,<field 1>,<field 2>,...\n
//! ```
//!
//! ### Response Format
//! ```text
//! <status>,<value 1>,<value 2>,...
//! ```
//!
//! Fields are joined as-is. A field containing a comma corrupts the framing;
//! the payment client has no escaping, so none is added here.

use std::io::{ErrorKind, Read, Write};

use super::{Reply, Request};
use crate::error::{DialectError, Result};

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a message id and fields into a newline-terminated line
pub fn encode_line<S: AsRef<str>>(id: &str, fields: &[S]) -> String {
    let mut line = String::from(id);
    for field in fields {
        line.push(',');
        line.push_str(field.as_ref());
    }
    line.push('\n');
    line
}

/// Encode a request into its wire line
pub fn encode_request(request: &Request) -> String {
    encode_line(request.id.as_str(), &request.fields)
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Decode a raw response line
///
/// Trailing line terminators are ignored. Element 0 is the status flag, the
/// rest are values.
pub fn decode_reply(raw: &str) -> Reply {
    let line = raw.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let mut parts = line.split(',');

    // split always yields at least one element
    let status = parts.next().unwrap_or_default().to_string();
    let values = parts.map(str::to_string).collect();

    Reply { status, values }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(encode_request(request).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read a single reply from a stream
///
/// Performs one read of at most `max_frame_size` bytes. Anything the peer
/// sent beyond that is not consumed.
pub fn read_reply<R: Read>(reader: &mut R, max_frame_size: usize) -> Result<Reply> {
    let mut buf = vec![0u8; max_frame_size];

    let n = loop {
        match reader.read(&mut buf) {
            Ok(n) => break n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    };

    if n == 0 {
        return Err(DialectError::Transport(
            "connection closed by payment client".to_string(),
        ));
    }

    Ok(decode_reply(&String::from_utf8_lossy(&buf[..n])))
}
