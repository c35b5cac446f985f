//! Reply definitions
//!
//! Decoded response lines from the payment client.

/// Status flag meaning the payment client accepted the message.
///
/// This is the per-message ack, not a transaction result code: result code
/// `1` means "Transaction Declined".
pub const OK_STATUS: &str = "1";

/// A decoded response line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Per-message status flag
    pub status: String,

    /// Ordered values following the status flag
    pub values: Vec<String>,
}

impl Reply {
    /// True iff the status flag is the OK sentinel
    pub fn is_accepted(&self) -> bool {
        self.status == OK_STATUS
    }

    /// Value at `index` (0 is the element right after the status flag)
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}
