//! CLI argument definitions using clap derive macros.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use meli_fetcher_core::ClientOptions;
use meli_fetcher_core::fetch::constants::{
    CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS,
};

/// Look up a Mercado Livre listing and list its photos and variations.
///
/// The listing identifier (e.g. MLB1234567890) is read from the command line,
/// or prompted for when omitted. The API client id comes from --client-id or
/// the MELI_APP_ID environment variable.
#[derive(Parser, Debug)]
#[command(name = "meli-fetcher")]
#[command(author, version, about)]
pub struct Args {
    /// Listing identifier, e.g. MLB1234567890 (prompted for when omitted)
    pub item_id: Option<String>,

    /// Mercado Livre application client id (APP_ID)
    #[arg(long, env = "MELI_APP_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Item-lookup API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Connect timeout in seconds (1-120)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub connect_timeout: u64,

    /// Total request timeout in seconds (1-600)
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long)]
    pub quiet: bool,
}

/// How results and errors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing summary
    Text,
    /// A single JSON document on stdout
    Json,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Client options built from the network flags.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
