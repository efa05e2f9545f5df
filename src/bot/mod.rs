//! Interactive assistant loop.
//!
//! Reads one command per line, dispatches it through the `CommandHandler`,
//! and stops on `close`/`exit` or end of input. Persistence is left to the
//! caller, which gets the directory back from `into_directory`.

use crate::commands::{parse_input, Clock, CommandHandler, Outcome};
use crate::display::UserDisplay;
use crate::models::Directory;
use std::io::{self, BufRead};
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// The command loop, owning the directory for the session.
pub struct AssistantBot<D: UserDisplay, C: Clock> {
    directory: Directory,
    display: D,
    handler: CommandHandler<C>,
}

impl<D: UserDisplay, C: Clock> AssistantBot<D, C> {
    pub fn new(directory: Directory, display: D, handler: CommandHandler<C>) -> Self {
        Self {
            directory,
            display,
            handler,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Hand the directory back, typically to save it.
    pub fn into_directory(self) -> Directory {
        self.directory
    }

    /// Process a single input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_input(line) {
            Some((command, args)) => {
                self.handler
                    .execute(&mut self.directory, &mut self.display, &command, &args)
            }
            None => Outcome::Continue,
        }
    }

    /// Run until an exit command or end of input.
    ///
    /// # Errors
    ///
    /// Only read failures on `input` are returned; command errors are shown
    /// through the display and the loop carries on.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.display.show_message(GREETING);
        info!("Session started with {} contacts", self.directory.len());

        let mut lines = input.lines();
        loop {
            self.display.show_prompt(PROMPT);
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    debug!("End of input, closing session");
                    break;
                }
            };

            if self.handle_line(&line) == Outcome::Exit {
                break;
            }
        }

        info!("Session ended with {} contacts", self.directory.len());
        Ok(())
    }
}
