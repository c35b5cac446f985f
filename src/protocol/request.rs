//! Request definitions
//!
//! Messages the client sends to the payment client.

/// Key of the diagnostic text the payment client keeps for its last failure
pub const PAYMENT_CLIENT_ERROR_KEY: &str = "PaymentClient.Error";

/// Digital receipt key holding the single-character transaction result code
pub const QSI_RESPONSE_CODE_KEY: &str = "DigitalReceipt.QSIResponseCode";

/// Digital receipt key holding the authorization token
pub const TRANSACTION_NO_KEY: &str = "DigitalReceipt.TransactionNo";

/// Message identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    /// Fetch a field value (or diagnostic) by key
    GetField,
    /// Ask whether results are available for the submitted order
    InfoAvailable,
    /// Submit the order
    SubmitOrder,
    /// Set one payment attribute
    SetAttribute,
    /// Enumerate available digital receipt fields
    ListFields,
}

impl MessageId {
    /// Wire form of the identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageId::GetField => "4",
            MessageId::InfoAvailable => "5",
            MessageId::SubmitOrder => "6",
            MessageId::SetAttribute => "7",
            MessageId::ListFields => "33",
        }
    }
}

/// Payment attributes set one at a time before the order is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    CardNum,
    CardExp,
    CardSecurityCode,
    MerchTxnRef,
    TicketNo,
}

impl Attribute {
    /// Key understood by the payment client
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::CardNum => "CardNum",
            Attribute::CardExp => "CardExp",
            Attribute::CardSecurityCode => "CardSecurityCode",
            Attribute::MerchTxnRef => "MerchTxnRef",
            Attribute::TicketNo => "TicketNo",
        }
    }

    /// Values that must never appear in logs or user-facing messages
    pub fn is_sensitive(&self) -> bool {
        matches!(self, Attribute::CardNum | Attribute::CardSecurityCode)
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "CardNum" => Some(Attribute::CardNum),
            "CardExp" => Some(Attribute::CardExp),
            "CardSecurityCode" => Some(Attribute::CardSecurityCode),
            "MerchTxnRef" => Some(Attribute::MerchTxnRef),
            "TicketNo" => Some(Attribute::TicketNo),
            _ => None,
        }
    }
}

/// A request line: message id plus ordered fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: MessageId,
    pub fields: Vec<String>,
}

impl Request {
    /// Create a request from raw parts
    pub fn new(id: MessageId, fields: Vec<String>) -> Self {
        Self { id, fields }
    }

    /// `7,<key>,<value>`
    pub fn set_attribute(attribute: Attribute, value: impl Into<String>) -> Self {
        Self::new(
            MessageId::SetAttribute,
            vec![attribute.key().to_string(), value.into()],
        )
    }

    /// `6,<order details>,<merchant id>,<amount>,<locale>`
    pub fn submit_order(order_details: &str, merchant_id: &str, amount: u64, locale: &str) -> Self {
        Self::new(
            MessageId::SubmitOrder,
            vec![
                order_details.to_string(),
                merchant_id.to_string(),
                amount.to_string(),
                locale.to_string(),
            ],
        )
    }

    /// `5`
    pub fn info_available() -> Self {
        Self::new(MessageId::InfoAvailable, Vec::new())
    }

    /// `33`
    pub fn list_fields() -> Self {
        Self::new(MessageId::ListFields, Vec::new())
    }

    /// `4,<key>`
    pub fn get_field(key: impl Into<String>) -> Self {
        Self::new(MessageId::GetField, vec![key.into()])
    }

    /// Wire form with sensitive attribute values masked, for logging
    pub fn redacted(&self) -> String {
        let sensitive = self.id == MessageId::SetAttribute
            && self
                .fields
                .first()
                .and_then(|key| Attribute::from_key(key))
                .map_or(false, |attr| attr.is_sensitive());

        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        parts.push(self.id.as_str().to_string());
        for (i, field) in self.fields.iter().enumerate() {
            if sensitive && i > 0 {
                parts.push(mask(field));
            } else {
                parts.push(field.clone());
            }
        }
        parts.join(",")
    }
}

/// Mask all but the last four characters of values longer than four,
/// everything otherwise.
pub fn mask(value: &str) -> String {
    let len = value.chars().count();
    if len > 4 {
        let tail: String = value.chars().skip(len - 4).collect();
        format!("{}{}", "*".repeat(len - 4), tail)
    } else {
        "*".repeat(len)
    }
}
