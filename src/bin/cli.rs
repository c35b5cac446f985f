//! Dialect CLI
//!
//! Command-line interface for submitting purchases to a payment client.

use clap::{Parser, Subcommand};
use dialect::config::{DEFAULT_HOST, DEFAULT_MAX_FRAME_SIZE, DEFAULT_PORT};
use dialect::protocol::codes::RESPONSE_CODES;
use dialect::{Config, CreditCard, DialectGateway, Outcome, Purchase};
use tracing_subscriber::{fmt, EnvFilter};

/// Dialect CLI
#[derive(Parser, Debug)]
#[command(name = "dialect-cli")]
#[command(about = "CLI for the Dialect payment client")]
#[command(version)]
struct Args {
    /// Payment client host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Payment client port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Merchant identifier
    #[arg(short, long)]
    merchant_id: Option<String>,

    /// Connect timeout in milliseconds (0 = OS default)
    #[arg(long, default_value = "0")]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Maximum response size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    max_frame_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a card purchase
    Purchase {
        /// Amount in cents
        #[arg(short, long)]
        amount: u64,

        /// Card number
        #[arg(long)]
        card_number: String,

        /// Expiry month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,

        /// Expiry year (four digits)
        #[arg(long)]
        year: u16,

        /// Card security code
        #[arg(long)]
        cvv: String,

        /// Merchant transaction reference
        #[arg(long)]
        order_id: String,

        /// Invoice / ticket number
        #[arg(long)]
        invoice: String,

        /// Order description (no commas)
        #[arg(long, default_value = "")]
        order_details: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List transaction result codes
    Codes,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dialect=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Codes => {
            for (code, message) in RESPONSE_CODES {
                println!("{}  {}", code, message);
            }
        }
        Commands::Purchase {
            amount,
            ref card_number,
            month,
            year,
            ref cvv,
            ref order_id,
            ref invoice,
            ref order_details,
            json,
        } => {
            let mut builder = Config::builder()
                .host(&args.host)
                .port(args.port)
                .connect_timeout_ms(args.connect_timeout_ms)
                .read_timeout_ms(args.read_timeout_ms)
                .max_frame_size(args.max_frame_size);
            if let Some(merchant_id) = &args.merchant_id {
                builder = builder.merchant_id(merchant_id);
            }

            let config = match builder.build() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("{}", e);
                    std::process::exit(2);
                }
            };

            tracing::info!("Dialect CLI v{}", dialect::VERSION);
            tracing::info!("Payment client: {}", config.address());

            let card = CreditCard::new(card_number, month, year, cvv);
            let purchase = Purchase::new(amount, card, order_id, invoice)
                .with_order_details(order_details);

            let outcome = DialectGateway::new(config).purchase(&purchase);
            print_outcome(&outcome, json);

            if !outcome.success {
                std::process::exit(1);
            }
        }
    }
}

fn print_outcome(outcome: &Outcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(outcome) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                tracing::error!("Failed to serialize outcome: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("success:       {}", outcome.success);
    println!("message:       {}", outcome.message);
    if let Some(authorization) = &outcome.authorization {
        println!("authorization: {}", authorization);
    }

    let mut fields: Vec<_> = outcome.fields.iter().collect();
    fields.sort();
    for (key, value) in fields {
        println!("  {} = {}", key, value);
    }
}
