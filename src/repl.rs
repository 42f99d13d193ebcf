//! Interactive session: read a line, dispatch it, print the reply.

use crate::commands::{CommandContext, CommandTable, Reply};
use anyhow::Result;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};
use std::io::{BufRead, Write};
use tracing::{debug, error};

/// A command loop over any line source and output sink.
pub struct Session {
    table: CommandTable,
    context: CommandContext,
    prompt: String,
}

impl Session {
    /// Create a session that prints `prompt` before each line.
    pub fn new(table: CommandTable, context: CommandContext, prompt: impl Into<String>) -> Self {
        Self {
            table,
            context,
            prompt: prompt.into(),
        }
    }

    /// Run until an exit command or end of input.
    ///
    /// Command faults are logged and reported on `output`; the loop keeps
    /// going. Only I/O errors on `input`/`output` end the session early.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                break;
            }

            let command = line.trim();
            if command.is_empty() {
                continue;
            }

            match self.table.dispatch(&self.context, command) {
                Ok(Reply::Message(message)) => writeln!(output, "{}", message)?,
                Ok(Reply::Clear) => {
                    queue!(output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
                    output.flush()?;
                }
                Ok(Reply::Exit) => {
                    writeln!(output, "Good bye!")?;
                    break;
                }
                Err(e) => {
                    error!(command, error = %e, "command failed");
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }
}
