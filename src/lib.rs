//! recurl library interface
//!
//! Bidirectional conversion between shell-style `curl` invocations and a
//! structured HTTP request description.
//!
//! # Module Organization
//!
//! - [`request`] - The structured request model ([`ParsedRequest`])
//! - [`curl`] - The codec itself ([`parse_curl`], [`generate_curl`])
//! - [`shell`] - Shell-style tokenizer with loose quoting
//! - [`flags`] - Schema-driven flag parsing
//! - [`literal`] - Rendering JSON values as source text
//! - [`errors`] - Error types (RecurlError, Result)
//!
//! # Example
//!
//! ```
//! use recurl::{parse_curl, generate_curl};
//!
//! let request = parse_curl(r#"curl https://api.example.com/users?limit=3"#).unwrap();
//! assert_eq!(request.url, "https://api.example.com/users");
//!
//! let command = generate_curl(&request);
//! assert_eq!(parse_curl(&command).as_ref(), Some(&request));
//! ```

pub mod cli;
pub mod core;
pub mod curl;
pub mod errors;
pub mod flags;
pub mod literal;
pub mod request;
pub mod shell;
pub mod status;

pub use curl::{generate_curl, parse_curl};
pub use errors::{RecurlError, Result};
pub use request::{Body, Method, NamedPair, ParsedRequest};
