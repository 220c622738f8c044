//! Command handlers shared by one-shot subcommands and the interactive menu.
//!
//! Handlers write user-facing text to the given writer. Mutating handlers
//! return whether the change was applied so one-shot mode can set the exit code.

pub(crate) mod catalog;
pub(crate) mod edit;
pub(crate) mod site;
