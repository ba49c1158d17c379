//! NextGen application core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` abstracts the key/value persistence medium, `store` layers JSON
//! (de)serialization and in-memory mirrors on top of it, `theme` derives the
//! light/dark configuration from one persisted entry, `api` is the JSON REST
//! client, and `state` holds the view models the front-end renders from.
//! Nothing here is process-global: callers build a `PersistedStore` and pass
//! it to whatever needs it.

pub mod api;
pub mod config;
pub mod constants;
pub mod state;
pub mod storage;
pub mod store;
pub mod theme;
pub mod util;
