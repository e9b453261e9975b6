// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Parser
//!
//! Splits an already-decoded plain-text email body into the reply the sender
//! actually wrote and the "chain" around it: quoted history, forwarded
//! headers, signatures and mobile-client footers.
//!
//! # Features
//!
//! - `On ... wrote:` quote headers, including ones wrapped over several lines
//! - Outlook `*From:*` headers and header blocks run together on one line
//! - Signature detection that tells dash bullets and content rules apart
//! - Fragment-level access to the full partition of the body
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::{parse_chain, parse_reply, read};
//!
//! let body = "Sounds good!\n\nOn Mon, Jan 1, 2024, Ann <ann@example.com> wrote:\n> Lunch?";
//!
//! assert_eq!(parse_reply(body), "Sounds good!");
//! assert!(parse_chain(body).starts_with("On Mon"));
//!
//! let message = read(body);
//! assert_eq!(message.fragments.len(), 2);
//! ```

mod config;
mod error;
mod normalize;
mod parser;
mod patterns;
mod types;

pub use config::ParserConfig;
pub use error::{ParseError, Result};
pub use normalize::normalize;
pub use parser::EmailReplyParser;
pub use types::*;

/// Parse a body into fragments with the default thresholds
#[must_use]
pub fn read(text: &str) -> EmailMessage {
    EmailReplyParser::default().read(text)
}

/// The reply portion of a body
#[must_use]
pub fn parse_reply(text: &str) -> String {
    read(text).reply()
}

/// The quoted/forwarded portion of a body
#[must_use]
pub fn parse_chain(text: &str) -> String {
    read(text).chain()
}
