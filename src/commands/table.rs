//! Command table and dispatch.
//!
//! The table is built once at startup and handed to whoever runs the input
//! loop. Matching is by whole words, case-insensitively, and the longest
//! matching command name wins, so `del user` beats a hypothetical `del`.

use super::handlers;
use crate::error::CommandResult;
use crate::services::LookupService;
use std::fmt;
use tracing::debug;

/// Shown when a command is missing arguments or gets an invalid one.
pub const INPUT_GUIDANCE: &str =
    "Enter all required arguments please.\nTo see more info type 'help'.";

/// Shown for input that matches no command.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see available commands.";

/// What the input loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this status text
    Message(String),
    /// Clear the terminal
    Clear,
    /// End the session
    Exit,
}

/// State shared by every handler.
#[derive(Clone)]
pub struct CommandContext {
    lookup: LookupService,
}

impl CommandContext {
    /// Create a new context around the lookup service.
    pub fn new(lookup: LookupService) -> Self {
        Self { lookup }
    }

    /// The lookup service handlers load and store through.
    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }
}

/// One handler invocation.
pub struct Request<'a> {
    pub context: &'a CommandContext,
    pub table: &'a CommandTable,
    pub args: &'a [&'a str],
}

/// Signature every command handler implements.
pub type Handler = fn(&Request<'_>) -> CommandResult<Reply>;

/// A command: the names that invoke it plus its handler.
#[derive(Clone)]
pub struct CommandSpec {
    /// Invocation names; multi-word names are matched word by word
    pub names: &'static [&'static str],
    /// Argument synopsis, e.g. `<name> <phone>...`
    pub usage: &'static str,
    /// One-line description for `help`
    pub description: &'static str,
    pub handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("names", &self.names)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// The lookup table from command name to handler.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// Build the table with every built-in command.
    pub fn new() -> Self {
        Self::with_commands(handlers::builtin_commands())
    }

    /// Build a table from an explicit command list.
    pub fn with_commands(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    /// All registered commands, in registration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Find the command `tokens` start with. Returns it with the remaining
    /// tokens as positional arguments.
    pub fn parse<'t, 's>(&self, tokens: &'t [&'s str]) -> Option<(&CommandSpec, &'t [&'s str])> {
        let mut best: Option<(&CommandSpec, usize)> = None;

        for spec in &self.commands {
            for name in spec.names {
                let words: Vec<&str> = name.split_whitespace().collect();
                let matches = words.len() <= tokens.len()
                    && words
                        .iter()
                        .zip(tokens)
                        .all(|(word, token)| word.eq_ignore_ascii_case(token));

                if matches && best.map_or(true, |(_, len)| words.len() > len) {
                    best = Some((spec, words.len()));
                }
            }
        }

        best.map(|(spec, len)| (spec, &tokens[len..]))
    }

    /// Parse and run one line of input.
    ///
    /// Missing or invalid arguments come back as [`INPUT_GUIDANCE`] rather
    /// than an error. Storage and directory faults propagate.
    pub fn dispatch(&self, context: &CommandContext, line: &str) -> CommandResult<Reply> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((spec, args)) = self.parse(&tokens) else {
            debug!(line, "no command matched");
            return Ok(Reply::Message(UNKNOWN_COMMAND.to_string()));
        };

        debug!(command = spec.names[0], args = args.len(), "dispatching command");
        let request = Request {
            context,
            table: self,
            args,
        };

        match (spec.handler)(&request) {
            Err(e) if e.is_user_input() => {
                debug!(command = spec.names[0], error = %e, "rejected command input");
                Ok(Reply::Message(INPUT_GUIDANCE.to_string()))
            }
            other => other,
        }
    }

    /// Render the `help` listing.
    pub fn help_text(&self) -> String {
        self.commands
            .iter()
            .map(|spec| {
                let names = spec.names.join(" / ");
                if spec.usage.is_empty() {
                    format!("{}: {}", names, spec.description)
                } else {
                    format!("{} {}: {}", names, spec.usage, spec.description)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
