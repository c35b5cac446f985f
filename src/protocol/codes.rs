//! Transaction result codes
//!
//! Maps the single-character `DigitalReceipt.QSIResponseCode` to its message.

/// Result code of a successful transaction
pub const SUCCESS_CODE: &str = "0";

/// Catch-all code for an undetermined transaction status
pub const UNKNOWN_CODE: &str = "?";

/// Message for [`SUCCESS_CODE`]
pub const SUCCESS_MESSAGE: &str = "Transaction Successful";

/// Message for [`UNKNOWN_CODE`]
pub const UNKNOWN_MESSAGE: &str = "Transaction status is unknown";

/// Every result code the payment client reports, with its message
pub const RESPONSE_CODES: [(&str, &str); 25] = [
    (SUCCESS_CODE, SUCCESS_MESSAGE),
    ("1", "Transaction Declined"),
    ("2", "Bank Declined Transaction"),
    ("3", "No Reply from Bank"),
    ("4", "Expired Card"),
    ("5", "Insufficient Funds"),
    ("6", "Error Communicating with Bank"),
    ("7", "Payment Server detected an error"),
    ("8", "Transaction Type Not Supported"),
    ("9", "Bank declined transaction (Do not contact Bank)"),
    ("A", "Transaction Aborted"),
    ("B", "Transaction Declined - Contact the Bank"),
    ("C", "Transaction Cancelled"),
    ("D", "Deferred transaction has been received and is awaiting processing"),
    ("F", "3-D Secure Authentication failed"),
    ("I", "Card Security Code verification failed"),
    ("L", "Shopping Transaction Locked (Please try the transaction again later)"),
    ("N", "Cardholder is not enrolled in Authentication scheme"),
    ("P", "Transaction has been received by the Payment Adaptor and is being processed"),
    ("R", "Transaction was not processed - Reached limit of retry attempts allowed"),
    ("S", "Duplicate OrderInfo"),
    ("T", "Address Verification Failed"),
    ("U", "Card Security Code Failed"),
    ("V", "Address Verification and Card Security Code Failed"),
    (UNKNOWN_CODE, UNKNOWN_MESSAGE),
];

/// Message for an exact code match, `None` for anything not in the table
pub fn describe(code: &str) -> Option<&'static str> {
    RESPONSE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, message)| *message)
}
