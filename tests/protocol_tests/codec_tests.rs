//! Codec Tests
//!
//! Tests for request encoding and reply decoding.

use std::io::Cursor;

use dialect::protocol::{
    decode_reply, encode_line, encode_request, read_reply, write_request, Attribute, MessageId,
    Request, OK_STATUS,
};
use dialect::DialectError;

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_line_with_fields() {
    let encoded = encode_line("4", &["DigitalReceipt.QSIResponseCode"]);
    assert_eq!(encoded, "4,DigitalReceipt.QSIResponseCode\n");
}

#[test]
fn test_encode_line_without_fields() {
    let empty: [&str; 0] = [];
    assert_eq!(encode_line("33", &empty), "33\n");
}

#[test]
fn test_encode_keeps_field_order() {
    let request = Request::submit_order("Two widgets", "MERCH01", 2500, "en");
    assert_eq!(encode_request(&request), "6,Two widgets,MERCH01,2500,en\n");
}

#[test]
fn test_encode_does_not_escape_commas() {
    let request = Request::submit_order("a,b", "M", 1, "en");
    assert_eq!(encode_request(&request), "6,a,b,M,1,en\n");
}

#[test]
fn test_encode_empty_field() {
    let request = Request::submit_order("", "M", 0, "en");
    assert_eq!(encode_request(&request), "6,,M,0,en\n");
}

#[test]
fn test_request_constructors() {
    assert_eq!(encode_request(&Request::info_available()), "5\n");
    assert_eq!(encode_request(&Request::list_fields()), "33\n");
    assert_eq!(
        encode_request(&Request::set_attribute(Attribute::CardExp, "2705")),
        "7,CardExp,2705\n"
    );
    assert_eq!(
        encode_request(&Request::get_field("PaymentClient.Error")),
        "4,PaymentClient.Error\n"
    );
}

#[test]
fn test_message_ids() {
    assert_eq!(MessageId::GetField.as_str(), "4");
    assert_eq!(MessageId::InfoAvailable.as_str(), "5");
    assert_eq!(MessageId::SubmitOrder.as_str(), "6");
    assert_eq!(MessageId::SetAttribute.as_str(), "7");
    assert_eq!(MessageId::ListFields.as_str(), "33");
}

// =============================================================================
// Redaction Tests
// =============================================================================

#[test]
fn test_redacted_masks_card_number() {
    let request = Request::set_attribute(Attribute::CardNum, "4005550000000001");
    assert_eq!(request.redacted(), "7,CardNum,************0001");
}

#[test]
fn test_redacted_masks_security_code() {
    let request = Request::set_attribute(Attribute::CardSecurityCode, "123");
    assert_eq!(request.redacted(), "7,CardSecurityCode,***");
}

#[test]
fn test_redacted_leaves_other_requests() {
    let request = Request::set_attribute(Attribute::MerchTxnRef, "ORD-1");
    assert_eq!(request.redacted(), "7,MerchTxnRef,ORD-1");

    let request = Request::get_field("CardNum");
    assert_eq!(request.redacted(), "4,CardNum");
}

// =============================================================================
// Reply Decoding Tests
// =============================================================================

#[test]
fn test_decode_accepted_reply() {
    let reply = decode_reply("1,42,hello");

    assert_eq!(reply.status, OK_STATUS);
    assert!(reply.is_accepted());
    assert_eq!(reply.values, vec!["42", "hello"]);
}

#[test]
fn test_decode_rejected_reply() {
    let reply = decode_reply("0,bad field");

    assert_eq!(reply.status, "0");
    assert!(!reply.is_accepted());
    assert_eq!(reply.values, vec!["bad field"]);
}

#[test]
fn test_decode_status_only() {
    let reply = decode_reply("1\n");

    assert!(reply.is_accepted());
    assert!(reply.values.is_empty());
    assert_eq!(reply.value(0), None);
}

#[test]
fn test_decode_strips_line_terminators() {
    let raw = String::from("1,TX123\r\n");
    let reply = decode_reply(&raw);

    assert_eq!(reply.value(0), Some("TX123"));
    // Input untouched
    assert_eq!(raw, "1,TX123\r\n");
}

#[test]
fn test_decode_keeps_empty_values() {
    let reply = decode_reply("1,,x,");
    assert_eq!(reply.values, vec!["", "x", ""]);
}

#[test]
fn test_decode_empty_line_is_rejected() {
    let reply = decode_reply("");

    assert_eq!(reply.status, "");
    assert!(!reply.is_accepted());
    assert!(reply.values.is_empty());
}

#[test]
fn test_ok_sentinel_is_not_result_code() {
    // "0" is the success result code but a rejected status flag
    assert!(!decode_reply("0").is_accepted());
    // "1" is the declined result code but an accepted status flag
    assert!(decode_reply("1").is_accepted());
}

// =============================================================================
// Stream Tests
// =============================================================================

#[test]
fn test_write_request_to_stream() {
    let mut buffer = Vec::new();
    write_request(&mut buffer, &Request::get_field("DigitalReceipt.TransactionNo")).unwrap();

    assert_eq!(buffer, b"4,DigitalReceipt.TransactionNo\n");
}

#[test]
fn test_read_reply_from_stream() {
    let mut cursor = Cursor::new(b"1,A,B\n".to_vec());
    let reply = read_reply(&mut cursor, 500).unwrap();

    assert!(reply.is_accepted());
    assert_eq!(reply.values, vec!["A", "B"]);
}

#[test]
fn test_read_reply_truncates() {
    let mut cursor = Cursor::new(b"1,abcdef\n".to_vec());
    let reply = read_reply(&mut cursor, 5).unwrap();

    assert_eq!(reply.values, vec!["abc"]);
    // The rest is left for the next read
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_read_reply_at_end_of_stream() {
    let mut cursor = Cursor::new(Vec::new());
    let result = read_reply(&mut cursor, 500);

    assert!(matches!(result, Err(DialectError::Transport(_))));
}
