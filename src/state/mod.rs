//! View models the front-end renders from.
//!
//! SYSTEM CONTEXT
//! ==============
//! `todos` persists through the injected store, `users` reads from the API
//! client, `counter` is purely local. None of them touch another's state.

pub mod counter;
pub mod todos;
pub mod users;
