//! Wire types and backend client for the charter pricing and fleet optimizer service.
//!
//! The pricing arithmetic, the ML model and the assignment solver all live in
//! the external service. This crate only knows the shape of what goes over the
//! wire and, behind the `api` feature, how to send it.

pub mod catalog;
pub mod lenient;
pub mod optimizer;
pub mod pricing;
pub mod routes;
#[cfg(feature = "api")]
pub mod transport;
