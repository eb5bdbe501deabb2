//! ur-cli library
//!
//! Exports the HTTP client and the form view for use in tests and the `ur` binary.

pub(crate) mod client;
pub mod form_view;


pub use client::{CliClientResult, Client, ClientError};
pub use form_view::{FormView, GENERIC_ERROR, REQUIRED_FIELDS, SUCCESS};
