//! Utility helpers shared by the stores and the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (durable storage,
//! presentation side effects) from store and client logic so both can be
//! swapped for in-memory doubles in tests.

pub mod storage;
pub mod theme;
