//! Transport
//!
//! The byte stream a session talks over, and opening it over TCP.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{DialectError, Result};

/// A bidirectional stream to the payment client
pub trait Transport: Read + Write {
    /// Close the stream. Called at most once per session.
    fn close(&mut self) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

/// Open a TCP connection to the configured payment client
///
/// Errors are [`DialectError::Connect`] with a user-facing description.
pub fn connect(config: &Config) -> Result<TcpStream> {
    let addrs = resolve(config)?;

    let stream = open(&addrs, config).map_err(|e| match e.kind() {
        ErrorKind::TimedOut | ErrorKind::WouldBlock => {
            DialectError::Connect(format!("Timed out ({})", config.address()))
        }
        _ => DialectError::Connect(format!(
            "Error happened while connecting to payment gateway - {}",
            e
        )),
    })?;

    // Requests are single short lines; don't let Nagle hold them back
    stream.set_nodelay(true)?;

    if config.read_timeout_ms > 0 {
        stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
    }
    if config.write_timeout_ms > 0 {
        stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
    }

    Ok(stream)
}

fn resolve(config: &Config) -> Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = (config.host.as_str(), config.port)
        .to_socket_addrs()
        .map_err(|e| DialectError::Connect(format!("Socket error - {}", e)))?
        .collect();

    if addrs.is_empty() {
        return Err(DialectError::Connect(format!(
            "Socket error - no addresses found for {}",
            config.address()
        )));
    }

    Ok(addrs)
}

/// Try each resolved address in turn, returning the last error if none work
fn open(addrs: &[SocketAddr], config: &Config) -> io::Result<TcpStream> {
    let mut last_err = None;

    for addr in addrs {
        let attempt = if config.connect_timeout_ms > 0 {
            TcpStream::connect_timeout(addr, Duration::from_millis(config.connect_timeout_ms))
        } else {
            TcpStream::connect(addr)
        };

        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| io::Error::new(ErrorKind::NotFound, "no address to connect to")))
}
