//! Client state shared across pages.
//!
//! DESIGN
//! ======
//! `session` and `storage` own persisted identity; `auth` and `users` are the
//! plain state structs that pages wrap in signals.

pub mod auth;
pub mod session;
pub mod storage;
pub mod users;
