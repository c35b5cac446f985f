//! Result Code Tests
//!
//! Tests for the transaction result code table.

use std::collections::HashSet;

use dialect::protocol::codes::{
    describe, RESPONSE_CODES, SUCCESS_CODE, SUCCESS_MESSAGE, UNKNOWN_CODE, UNKNOWN_MESSAGE,
};

#[test]
fn test_every_code_describes_to_its_message() {
    let expected = [
        ("0", "Transaction Successful"),
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
        ("?", "Transaction status is unknown"),
    ];

    assert_eq!(RESPONSE_CODES.len(), expected.len());
    for (code, message) in expected {
        assert_eq!(describe(code), Some(message), "code {:?}", code);
    }
}

#[test]
fn test_codes_are_unique() {
    let codes: HashSet<_> = RESPONSE_CODES.iter().map(|(code, _)| *code).collect();
    assert_eq!(codes.len(), RESPONSE_CODES.len());
}

#[test]
fn test_success_and_unknown_constants() {
    assert_eq!(describe(SUCCESS_CODE), Some(SUCCESS_MESSAGE));
    assert_eq!(describe(UNKNOWN_CODE), Some(UNKNOWN_MESSAGE));
}

#[test]
fn test_no_implicit_fallback() {
    assert_eq!(describe("E"), None);
    assert_eq!(describe("Z"), None);
    assert_eq!(describe(""), None);
    assert_eq!(describe("00"), None);
    assert_eq!(describe("a"), None);
}
