//! Small helpers shared by the view models and the CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` renders dates and numbers the way the French-language front-end
//! shows them, `validate` checks user input, `id` mints short random ids.

pub mod format;
pub mod id;
pub mod validate;
