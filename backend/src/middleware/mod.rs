//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as tracing. Role checks live with the HTTP adapter in
//! [`crate::inbound::http::authorize`].

pub mod trace;

pub use trace::Trace;
