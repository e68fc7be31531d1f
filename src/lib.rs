//! Authenticated API client for the AILAP log-analysis console.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console talks to a REST backend under `<base_url>/api`. This crate
//! holds the pieces a console needs around those calls: a session store
//! that persists the bearer token, UI preferences (theme, locale, sider),
//! a guarded route table, and an HTTP client whose middleware attaches the
//! token and ends the session on 401/403.
//!
//! Everything is wired through an explicit [`context::ConsoleContext`]; the
//! `ailap` binary builds one over file-backed storage and a reqwest
//! transport.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod net;
pub mod routes;
pub mod state;
pub mod util;
