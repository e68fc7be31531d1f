//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends one HTTP exchange, `middleware` augments requests and
//! reacts to failures, `client` strings the two together, and `types`
//! defines the request/response shapes passed between them.

pub mod client;
pub mod middleware;
pub mod transport;
pub mod types;
