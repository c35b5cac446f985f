//! Protocol Session
//!
//! Runs one transaction against the payment client over a single
//! connection.

use std::collections::HashMap;
use std::net::TcpStream;

use crate::config::Config;
use crate::error::{DialectError, Result};
use crate::protocol::codes::{self, UNKNOWN_MESSAGE};
use crate::protocol::{
    mask, read_reply, write_request, Attribute, Reply, Request, PAYMENT_CLIENT_ERROR_KEY,
    QSI_RESPONSE_CODE_KEY,
};
use crate::transaction::{Outcome, Purchase};

use super::transport::{self, Transport};

/// Stops the exchange; carries the final user-facing message
#[derive(Debug)]
struct Halt(String);

type Step<T> = std::result::Result<T, Halt>;

/// A connection to the payment client, good for one transaction
///
/// ## Exchange
///
/// ```text
///   7,CardNum,..  7,CardExp,..  7,CardSecurityCode,..  7,MerchTxnRef,..  7,TicketNo,..
///        │
///        ▼
///   6,<details>,<merchant>,<amount>,<locale>     (rejected → 4,PaymentClient.Error)
///        │
///        ▼
///   5                                            (rejected → 4,PaymentClient.Error)
///        │
///        ▼
///   33 → field names → 4,<name> for each
///        │
///        ▼
///   4,DigitalReceipt.QSIResponseCode → message
/// ```
///
/// The first failing step decides the message and every later step is
/// skipped. The transport is closed once, whatever happened.
pub struct Session<T: Transport = TcpStream> {
    config: Config,

    /// `None` once closed, or if the connection never opened
    transport: Option<T>,

    /// Why the connection never opened
    connect_failure: Option<String>,
}

impl Session<TcpStream> {
    /// Connect to the configured payment client
    ///
    /// Never fails: a connection failure is recorded and reported as the
    /// outcome of the transaction.
    pub fn connect(config: Config) -> Self {
        match transport::connect(&config) {
            Ok(stream) => {
                tracing::debug!("Connected to payment client at {}", config.address());
                Self::with_transport(config, stream)
            }
            Err(e) => {
                tracing::warn!("Could not connect to payment client at {}: {}", config.address(), e);
                Self {
                    config,
                    transport: None,
                    connect_failure: Some(e.to_string()),
                }
            }
        }
    }
}

impl<T: Transport> Session<T> {
    /// Run a session over an already-open transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            config,
            transport: Some(transport),
            connect_failure: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the transport is still open
    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Description of the connection failure, if the connection never opened
    pub fn connect_failure(&self) -> Option<&str> {
        self.connect_failure.as_deref()
    }

    /// One round-trip: send `request`, read and decode the reply
    ///
    /// A rejected message is still `Ok`; check [`Reply::is_accepted`].
    /// Errors are transport failures only.
    pub fn dispatch(&mut self, request: &Request) -> Result<Reply> {
        let max_frame_size = self.config.max_frame_size;
        let transport = self.transport.as_mut().ok_or(DialectError::NotConnected)?;

        tracing::debug!("-> {}", request.redacted());
        write_request(transport, request)?;

        let reply = read_reply(transport, max_frame_size)?;
        tracing::trace!("<- status={} values={}", reply.status, reply.values.len());

        Ok(reply)
    }

    /// Submit a purchase and collect its result
    ///
    /// Consumes the session; the transport is closed before returning.
    pub fn submit_transaction(mut self, purchase: &Purchase) -> Outcome {
        let mut fields = HashMap::new();

        let message = match self.run(purchase, &mut fields) {
            Ok(message) => message,
            Err(Halt(message)) => message,
        };

        self.close();

        let outcome = Outcome::new(message, fields);
        tracing::info!(
            "Transaction {} finished: success={} message={:?}",
            purchase.order_id,
            outcome.success,
            outcome.message
        );
        outcome
    }

    /// Close the transport. Safe to call repeatedly or on a session that
    /// never connected.
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if let Err(e) = transport.close() {
                tracing::debug!("Error closing payment client connection: {}", e);
            }
        }
    }

    // =========================================================================
    // Transaction Steps
    // =========================================================================

    fn run(&mut self, purchase: &Purchase, fields: &mut HashMap<String, String>) -> Step<String> {
        if let Some(failure) = &self.connect_failure {
            return Err(Halt(failure.clone()));
        }

        self.add_payment_info(purchase)?;
        self.post_payment(purchase)?;
        self.info_available()?;

        for name in self.all_keys()? {
            let value = self.receipt_field(&name)?;
            fields.insert(name, value);
        }

        self.qsi_response()
    }

    fn add_payment_info(&mut self, purchase: &Purchase) -> Step<()> {
        let card = &purchase.card;
        let attributes = [
            (Attribute::CardNum, card.number.clone()),
            (Attribute::CardExp, card.expiry()),
            (Attribute::CardSecurityCode, card.verification_value.clone()),
            (Attribute::MerchTxnRef, purchase.order_id.clone()),
            (Attribute::TicketNo, purchase.invoice.clone()),
        ];

        for (attribute, value) in attributes {
            let reply = self.send(&Request::set_attribute(attribute, value.as_str()))?;
            if !reply.is_accepted() {
                let shown = if attribute.is_sensitive() { mask(&value) } else { value };
                return Err(Halt(format!(
                    "Failed to add payment data: {}: {}",
                    attribute.key(),
                    shown
                )));
            }
        }

        Ok(())
    }

    fn post_payment(&mut self, purchase: &Purchase) -> Step<()> {
        let request = Request::submit_order(
            &purchase.order_details,
            &self.config.merchant_id,
            purchase.amount,
            &self.config.locale,
        );

        if self.send(&request)?.is_accepted() {
            Ok(())
        } else {
            Err(Halt(self.client_error()))
        }
    }

    fn info_available(&mut self) -> Step<()> {
        if self.send(&Request::info_available())?.is_accepted() {
            Ok(())
        } else {
            Err(Halt(self.client_error()))
        }
    }

    /// Names of the digital receipt fields the payment client holds
    fn all_keys(&mut self) -> Step<Vec<String>> {
        let reply = self.send(&Request::list_fields())?;
        if !reply.is_accepted() {
            return Err(Halt(self.client_error()));
        }

        Ok(reply
            .values
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Value of one receipt field, or a placeholder if the payment client
    /// has none
    fn receipt_field(&mut self, key: &str) -> Step<String> {
        let reply = self.send(&Request::get_field(key))?;
        if reply.is_accepted() {
            Ok(reply.value(0).unwrap_or_default().to_string())
        } else {
            Ok(no_result(key))
        }
    }

    /// Final message derived from the transaction result code
    fn qsi_response(&mut self) -> Step<String> {
        let reply = self.send(&Request::get_field(QSI_RESPONSE_CODE_KEY))?;
        if !reply.is_accepted() {
            return Ok(no_result(QSI_RESPONSE_CODE_KEY));
        }

        let code = reply.value(0).unwrap_or_default().trim();
        match codes::describe(code) {
            Some(message) => Ok(message.to_string()),
            None => {
                tracing::warn!("Unrecognised result code {:?} from payment client", code);
                Ok(UNKNOWN_MESSAGE.to_string())
            }
        }
    }

    /// Diagnostic text for the payment client's last failure
    fn client_error(&mut self) -> String {
        match self.dispatch(&Request::get_field(PAYMENT_CLIENT_ERROR_KEY)) {
            Ok(reply) => reply
                .value(0)
                .map(str::to_string)
                .unwrap_or_else(|| no_result(PAYMENT_CLIENT_ERROR_KEY)),
            Err(e) => transport_failure(&e),
        }
    }

    /// Dispatch, turning transport errors into a halt
    fn send(&mut self, request: &Request) -> Step<Reply> {
        self.dispatch(request).map_err(|e| {
            tracing::warn!("Payment client exchange failed: {}", e);
            Halt(transport_failure(&e))
        })
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.close();
    }
}

fn no_result(key: &str) -> String {
    format!("No result for this field : {}", key)
}

fn transport_failure(e: &DialectError) -> String {
    format!("Error communicating with payment client - {}", e)
}
