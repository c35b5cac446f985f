//! Protocol Module
//!
//! Defines the line protocol spoken with the payment client.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! <message id>,<field>,<field>,...\n
//! ```
//!
//! ### Messages
//! - `7`:  set payment attribute  - Fields: key, value
//! - `6`:  submit order           - Fields: order details, merchant id, amount, locale
//! - `5`:  results available?     - Fields: none
//! - `33`: list receipt fields    - Fields: none
//! - `4`:  fetch field            - Fields: key
//!
//! ### Response Format
//! ```text
//! <status>,<value>,<value>,...
//! ```
//!
//! ### Status
//! - `1`: accepted
//! - anything else: rejected, values carry diagnostic text

mod request;
mod reply;
mod codec;
pub mod codes;

pub use request::{
    mask, Attribute, MessageId, Request, PAYMENT_CLIENT_ERROR_KEY, QSI_RESPONSE_CODE_KEY,
    TRANSACTION_NO_KEY,
};
pub use reply::{Reply, OK_STATUS};
pub use codec::{decode_reply, encode_line, encode_request, read_reply, write_request};
