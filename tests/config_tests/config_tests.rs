//! Tests for Config
//!
//! These tests verify required-parameter validation and defaults.

use dialect::config::{Config, DEFAULT_LOCALE, DEFAULT_MAX_FRAME_SIZE};
use dialect::DialectError;

fn config_error(result: dialect::Result<Config>) -> String {
    match result {
        Err(DialectError::Config(message)) => message,
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_build_with_required_parameters() {
    let config = Config::builder()
        .host("localhost")
        .port(9050)
        .merchant_id("MERCH01")
        .build()
        .unwrap();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 9050);
    assert_eq!(config.merchant_id, "MERCH01");
    assert_eq!(config.address(), "localhost:9050");
}

#[test]
fn test_defaults() {
    let config = Config::builder()
        .host("localhost")
        .port(9050)
        .merchant_id("MERCH01")
        .build()
        .unwrap();

    assert_eq!(config.locale, DEFAULT_LOCALE);
    assert_eq!(config.max_frame_size, DEFAULT_MAX_FRAME_SIZE);
    assert_eq!(config.max_frame_size, 500);
    assert_eq!(config.connect_timeout_ms, 0);
    assert_eq!(config.read_timeout_ms, 0);
    assert_eq!(config.write_timeout_ms, 0);
}

#[test]
fn test_overrides() {
    let config = Config::builder()
        .host("10.0.0.5")
        .port(9100)
        .merchant_id("M")
        .locale("fr")
        .max_frame_size(1024)
        .connect_timeout_ms(250)
        .read_timeout_ms(3000)
        .write_timeout_ms(1000)
        .build()
        .unwrap();

    assert_eq!(config.locale, "fr");
    assert_eq!(config.max_frame_size, 1024);
    assert_eq!(config.connect_timeout_ms, 250);
    assert_eq!(config.read_timeout_ms, 3000);
    assert_eq!(config.write_timeout_ms, 1000);
}

#[test]
fn test_missing_everything() {
    let message = config_error(Config::builder().build());
    assert_eq!(message, "missing required parameter(s): host, port, merchant_id");
}

#[test]
fn test_missing_merchant_id() {
    let message = config_error(Config::builder().host("localhost").port(9050).build());
    assert_eq!(message, "missing required parameter(s): merchant_id");
}

#[test]
fn test_blank_host_is_missing() {
    let message = config_error(
        Config::builder()
            .host("  ")
            .port(9050)
            .merchant_id("M")
            .build(),
    );
    assert_eq!(message, "missing required parameter(s): host");
}

#[test]
fn test_zero_frame_size_rejected() {
    let result = Config::builder()
        .host("localhost")
        .port(9050)
        .merchant_id("M")
        .max_frame_size(0)
        .build();

    assert!(matches!(result, Err(DialectError::Config(_))));
}
