//! Networking modules for the GraphQL backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` exposes the typed operations, `transport` owns the HTTP call,
//! `operations` holds the GraphQL documents, `errors` normalizes failures and
//! `types` defines the wire schema.

pub mod errors;
#[cfg(test)]
pub(crate) mod fake_backend;
pub mod gateway;
pub mod operations;
pub mod transport;
pub mod types;
