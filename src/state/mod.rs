//! Client-side state stores.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so the HTTP client and the
//! router depend only on the store they read. Stores are shared through
//! `Arc` as explicit context rather than global singletons.

pub mod session;
pub mod ui;
