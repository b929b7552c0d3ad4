//! Error handling for the relay
//!
//! This module defines the error type returned by every relay operation and
//! the JSON body it turns into at the HTTP boundary.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{Operation, RelayError, Result};
