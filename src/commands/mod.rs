//! Text commands for the contact directory.
//!
//! - **table**: the command lookup table, parsing and dispatch
//! - **handlers**: one handler per command, built on the lookup service

pub mod handlers;
pub mod table;

pub use table::{
    CommandContext, CommandSpec, CommandTable, Handler, Reply, Request, INPUT_GUIDANCE,
    UNKNOWN_COMMAND,
};
