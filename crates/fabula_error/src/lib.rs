//! Error types for the Fabula library.
//!
//! This crate provides the error taxonomy shared by every Fabula crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The families map onto how a story request can fail:
//! - [`ConfigError`] - missing or invalid credential, model name, settings
//! - [`ValidationError`] - malformed genre table or character list
//! - [`TransportError`] - provider unreachable or timed out
//! - [`ProviderError`] - provider answered with a non-success response
//! - [`OutputError`] - the result could not be written out
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, TransportError, TransportErrorKind};
//!
//! fn fetch_story() -> FabulaResult<String> {
//!     Err(TransportError::new(TransportErrorKind::Timeout(30)))?
//! }
//!
//! match fetch_story() {
//!     Ok(story) => println!("{}", story),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod output;
mod provider;
mod retry;
mod transport;
mod validation;

pub use config::ConfigError;
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use output::OutputError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use retry::RetryableError;
pub use transport::{TransportError, TransportErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
