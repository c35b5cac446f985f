//! # Dialect
//!
//! Blocking client for the Dialect payment client, a local daemon that
//! speaks a comma-delimited line protocol over TCP.
//!
//! - One connection per transaction
//! - First failing step decides the outcome; later steps are skipped
//! - Declines and failures are returned as data, never as errors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DialectGateway                          │
//! │                 (one Session per purchase)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Session                               │
//! │     attributes → order → available? → fields → result code   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │   (codec)   │          │    (TCP)    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dialect::{Config, CreditCard, DialectGateway, Purchase};
//!
//! let config = Config::builder()
//!     .host("localhost")
//!     .port(9050)
//!     .merchant_id("TESTMERCHANT")
//!     .build()?;
//!
//! let card = CreditCard::new("4005550000000001", 5, 2027, "123");
//! let purchase = Purchase::new(1000, card, "ORD-1", "INV-1").with_order_details("Widgets");
//!
//! let outcome = DialectGateway::new(config).purchase(&purchase);
//! println!("{}: {}", outcome.success, outcome.message);
//! # Ok::<(), dialect::DialectError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;
pub mod transaction;
pub mod gateway;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DialectError, Result};
pub use config::Config;
pub use client::Session;
pub use transaction::{CreditCard, Outcome, Purchase};
pub use gateway::DialectGateway;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Dialect
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
