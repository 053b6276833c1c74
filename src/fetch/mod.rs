//! Item-lookup HTTP client and its failure classification.
//!
//! # Features
//!
//! - One GET per call, no retries
//! - Fixed `User-Agent`, credential passed as the `client_id` query parameter
//! - Explicit connect and total timeouts (10s / 30s by default)
//! - Four-way error classification: validation, transport, HTTP status, decode
//! - Status and decode failures keep the response body byte-for-byte

mod body;
mod client;
pub mod constants;
mod error;

pub use body::ResponseBody;
pub use client::{ClientOptions, ItemClient};
pub use error::{ClientBuildError, FetchError, TransportKind};
