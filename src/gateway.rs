//! Gateway
//!
//! Entry point for a payment framework: holds the merchant's connection
//! settings and runs each purchase on a fresh session.

use crate::client::Session;
use crate::config::Config;
use crate::transaction::{Outcome, Purchase};

/// Amounts are sent as integer minor units
pub const MONEY_FORMAT: &str = "cents";

pub const DEFAULT_CURRENCY: &str = "AUD";

/// ISO 3166 country codes the gateway serves
pub const SUPPORTED_COUNTRIES: [&str; 1] = ["AU"];

/// Card brands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    MasterCard,
    AmericanExpress,
    DinersClub,
}

/// Card brands the payment client accepts
pub const SUPPORTED_CARD_BRANDS: [CardBrand; 2] = [CardBrand::Visa, CardBrand::MasterCard];

/// Payment gateway backed by a local payment client
#[derive(Debug, Clone)]
pub struct DialectGateway {
    config: Config,
}

impl DialectGateway {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether purchases with this card brand are accepted
    pub fn supports(brand: CardBrand) -> bool {
        SUPPORTED_CARD_BRANDS.contains(&brand)
    }

    /// Run a purchase on its own connection
    pub fn purchase(&self, purchase: &Purchase) -> Outcome {
        Session::connect(self.config.clone()).submit_transaction(purchase)
    }
}
