//! Configuration for Dialect
//!
//! Connection parameters for the payment client. Host, port and merchant id
//! are required; everything else has a default.

use crate::error::{DialectError, Result};

/// Host the payment client conventionally listens on
pub const DEFAULT_HOST: &str = "localhost";

/// Port the payment client conventionally listens on
pub const DEFAULT_PORT: u16 = 9050;

/// Maximum number of bytes read for a single response
pub const DEFAULT_MAX_FRAME_SIZE: usize = 500;

/// Locale tag sent with the order submission
pub const DEFAULT_LOCALE: &str = "en";

/// Connection configuration for a payment client session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Required Parameters
    // -------------------------------------------------------------------------
    /// Payment client host
    pub host: String,

    /// Payment client port
    pub port: u16,

    /// Merchant identifier sent with every order
    pub merchant_id: String,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Locale tag sent with the order submission
    pub locale: String,

    /// Upper bound on a single response read (in bytes).
    /// Longer responses are truncated.
    pub max_frame_size: usize,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Connect timeout (milliseconds, 0 = OS default)
    pub connect_timeout_ms: u64,

    /// Socket read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` form used in log lines and error messages
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
///
/// `build` fails with [`DialectError::Config`] naming every missing
/// required parameter.
#[derive(Debug)]
pub struct ConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    merchant_id: Option<String>,
    locale: String,
    max_frame_size: usize,
    connect_timeout_ms: u64,
    read_timeout_ms: u64,
    write_timeout_ms: u64,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            merchant_id: None,
            locale: DEFAULT_LOCALE.to_string(),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            connect_timeout_ms: 0,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

impl ConfigBuilder {
    /// Set the payment client host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the payment client port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the merchant identifier
    pub fn merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Set the locale tag
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the maximum response size (in bytes)
    pub fn max_frame_size(mut self, bytes: usize) -> Self {
        self.max_frame_size = bytes;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Result<Config> {
        let mut missing = Vec::new();
        let host = self.host.filter(|h| !h.trim().is_empty());
        let merchant_id = self.merchant_id.filter(|m| !m.trim().is_empty());

        if host.is_none() {
            missing.push("host");
        }
        if self.port.is_none() {
            missing.push("port");
        }
        if merchant_id.is_none() {
            missing.push("merchant_id");
        }

        match (host, self.port, merchant_id) {
            (Some(host), Some(port), Some(merchant_id)) => {
                if self.max_frame_size == 0 {
                    return Err(DialectError::Config(
                        "max_frame_size must be greater than zero".to_string(),
                    ));
                }

                Ok(Config {
                    host,
                    port,
                    merchant_id,
                    locale: self.locale,
                    max_frame_size: self.max_frame_size,
                    connect_timeout_ms: self.connect_timeout_ms,
                    read_timeout_ms: self.read_timeout_ms,
                    write_timeout_ms: self.write_timeout_ms,
                })
            }
            _ => Err(DialectError::Config(format!(
                "missing required parameter(s): {}",
                missing.join(", ")
            ))),
        }
    }
}
