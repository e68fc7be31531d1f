//! Resource API modules, one per backend resource.
//!
//! Each function maps one-to-one onto a REST endpoint and returns the
//! client's result unmodified. Paths are relative to the client's base
//! path (`/api`).

pub mod ai;
pub mod auth;
pub mod datasources;
pub mod logs;
pub mod models;
pub mod monitors;
