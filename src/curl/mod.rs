//! Bidirectional conversion between curl commands and [`ParsedRequest`]
//!
//! [`parse_curl`] sniffs a pasted string for a curl invocation and returns the
//! structured request, [`generate_curl`] renders a structured request back
//! into a multi-line curl command. A command produced by the generator parses
//! back to an equal request.
//!
//! [`ParsedRequest`]: crate::request::ParsedRequest

pub mod export;
pub mod import;

pub use export::generate_curl;
pub use import::parse_curl;
