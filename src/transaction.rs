//! Transaction types
//!
//! What the caller hands in for a purchase and what it gets back.

use std::collections::HashMap;

use serde::Serialize;

use crate::protocol::codes::SUCCESS_MESSAGE;
use crate::protocol::TRANSACTION_NO_KEY;

/// Card details for a purchase
#[derive(Debug, Clone)]
pub struct CreditCard {
    pub number: String,

    /// 1-12
    pub month: u8,

    /// Four-digit year
    pub year: u16,

    /// Card security code
    pub verification_value: String,
}

impl CreditCard {
    pub fn new(
        number: impl Into<String>,
        month: u8,
        year: u16,
        verification_value: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            month,
            year,
            verification_value: verification_value.into(),
        }
    }

    /// Expiry as `YYMM`
    pub fn expiry(&self) -> String {
        format!("{:02}{:02}", self.year % 100, self.month)
    }
}

/// A single card payment
#[derive(Debug, Clone)]
pub struct Purchase {
    /// Amount in minor units (cents)
    pub amount: u64,

    pub card: CreditCard,

    /// Merchant transaction reference
    pub order_id: String,

    /// Invoice / ticket number
    pub invoice: String,

    /// Free-text order description. Must not contain commas.
    pub order_details: String,
}

impl Purchase {
    pub fn new(
        amount: u64,
        card: CreditCard,
        order_id: impl Into<String>,
        invoice: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            card,
            order_id: order_id.into(),
            invoice: invoice.into(),
            order_details: String::new(),
        }
    }

    /// Set the order description
    pub fn with_order_details(mut self, details: impl Into<String>) -> Self {
        self.order_details = details.into();
        self
    }
}

/// Normalized result of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,

    /// Final human-readable status
    pub message: String,

    /// Digital receipt fields, empty if the exchange stopped before
    /// enumeration
    pub fields: HashMap<String, String>,

    /// `DigitalReceipt.TransactionNo`, if the payment client reported one
    pub authorization: Option<String>,
}

impl Outcome {
    /// Build an outcome from the final message and collected fields
    pub fn new(message: String, fields: HashMap<String, String>) -> Self {
        let success = message == SUCCESS_MESSAGE;
        let authorization = fields.get(TRANSACTION_NO_KEY).cloned();

        Self {
            success,
            message,
            fields,
            authorization,
        }
    }
}
