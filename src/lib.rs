//! Typed Rust client for the TextMagic REST API (v2).
//!
//! The crate is split in three layers: a domain layer of strong types and resource records
//! (no I/O), a transport layer that owns the wire format (URL joining, form encoding, JSON
//! decoding), and a client layer that runs authenticated requests and maps their outcome to
//! typed results.
//!
//! ```rust,no_run
//! use textmagic::{Credentials, Params, TextMagicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TextMagicClient::new(Credentials::new("username", "api-key")?);
//!     client.ping().await?;
//!
//!     let params = Params::with("text", "Hello from Rust")?.and("phones", "447860021130")?;
//!     let sent = client.create_message(&params).await?;
//!     println!("message {} queued", sent.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_BASE_URL, TextMagicClient, TextMagicClientBuilder, TextMagicError};
pub use domain::{
    ApiError, ApiKey, AvailableNumbers, BulkSession, Chat, ChatMessage, Contact,
    ContactCustomField, Country, CountryPrice, Credentials, Currency, CustomField, Invoice, List,
    Message, MessagePrice, MessagingStat, NewMessage, NewResource, Number, Page, ParamValue,
    Params, PhoneNumber, RawPhoneNumber, Reply, Scheduled, SenderId, Session, Sources,
    SpendingStat, Template, Timezone, Unsubscriber, User, Username, ValidationError,
};
