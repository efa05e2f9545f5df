use super::{Clock, Command};
use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::config::MAX_WINDOW_DAYS;
use crate::display::UserDisplay;
use crate::error::{CommandError, CommandResult, ContactError};
use crate::models::{ContactRecord, Directory};
use tracing::debug;

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Runs commands against a directory and reports through a display.
///
/// `execute` is the single place where command errors are turned into
/// user-visible messages; individual handlers just return `CommandResult`.
pub struct CommandHandler<C: Clock> {
    clock: C,
    window_days: u32,
}

impl<C: Clock> CommandHandler<C> {
    pub fn new(clock: C) -> Self {
        Self::with_window(clock, DEFAULT_WINDOW_DAYS)
    }

    /// Use `window_days` when `birthdays` is called without an argument.
    pub fn with_window(clock: C, window_days: u32) -> Self {
        Self { clock, window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Run one command, rendering its result or its error.
    pub fn execute(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        command: &Command,
        args: &[&str],
    ) -> Outcome {
        debug!(command = command.name(), args = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => {
                display.show_message("Good bye!");
                return Outcome::Exit;
            }
            Command::Hello => {
                display.show_message("How can I help you?");
                Ok(())
            }
            Command::Help => {
                self.help(display);
                Ok(())
            }
            Command::Add => self.add_contact(directory, display, args),
            Command::Change => self.change_contact(directory, display, args),
            Command::Phone => self.show_phones(directory, display, args),
            Command::RemovePhone => self.remove_phone(directory, display, args),
            Command::Delete => self.delete_contact(directory, display, args),
            Command::All => {
                display.show_all_contacts(directory);
                Ok(())
            }
            Command::AddBirthday => self.add_birthday(directory, display, args),
            Command::ShowBirthday => self.show_birthday(directory, display, args),
            Command::Birthdays => self.birthdays(directory, display, args),
            Command::Unknown(token) => Err(CommandError::InvalidCommand(token.clone())),
        };

        if let Err(e) = result {
            debug!(command = command.name(), error = %e, "Command failed");
            display.show_error(&e.to_string());
        }
        Outcome::Continue
    }

    fn add_contact(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name] = required::<1>(&Command::Add, args)?;
        let phone = args.get(1).copied();

        if let Some(record) = directory.find_mut(name) {
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            display.show_message("Contact updated.");
            return Ok(());
        }

        let mut record = ContactRecord::new(name)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        directory.add_record(record);
        display.show_message("Contact added.");
        Ok(())
    }

    fn change_contact(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name, old, new] = required::<3>(&Command::Change, args)?;
        find_mut(directory, name)?.edit_phone(old, new)?;
        display.show_message("Contact changed.");
        Ok(())
    }

    fn show_phones(
        &self,
        directory: &Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name] = required::<1>(&Command::Phone, args)?;
        let record = directory
            .find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;

        if record.phones().is_empty() {
            display.show_message(&format!("{} has no phone numbers.", name));
        } else {
            let phones = record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            display.show_message(&phones);
        }
        Ok(())
    }

    fn remove_phone(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name, phone] = required::<2>(&Command::RemovePhone, args)?;
        find_mut(directory, name)?.remove_phone(phone)?;
        display.show_message("Phone removed.");
        Ok(())
    }

    fn delete_contact(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name] = required::<1>(&Command::Delete, args)?;
        directory
            .delete(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        display.show_message("Contact deleted.");
        Ok(())
    }

    fn add_birthday(
        &self,
        directory: &mut Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name, birthday] = required::<2>(&Command::AddBirthday, args)?;
        find_mut(directory, name)?.set_birthday(birthday)?;
        display.show_message("Birthday added.");
        Ok(())
    }

    fn show_birthday(
        &self,
        directory: &Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let [name] = required::<1>(&Command::ShowBirthday, args)?;
        let record = directory
            .find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        let birthday = record
            .birthday()
            .ok_or_else(|| ContactError::BirthdayNotSet(name.to_string()))?;

        display.show_message(&birthday.to_string());
        Ok(())
    }

    fn birthdays(
        &self,
        directory: &Directory,
        display: &mut dyn UserDisplay,
        args: &[&str],
    ) -> CommandResult<()> {
        let window_days = match args.first() {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|days| *days <= MAX_WINDOW_DAYS)
                .ok_or_else(|| CommandError::InvalidWindow(raw.to_string()))?,
            None => self.window_days,
        };

        let upcoming = directory.upcoming_birthdays(window_days, self.clock.today());
        if upcoming.is_empty() {
            display.show_message(&format!("No birthdays in the next {} days.", window_days));
        } else {
            let lines = upcoming
                .iter()
                .map(|entry| entry.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            display.show_message(&lines);
        }
        Ok(())
    }

    fn help(&self, display: &mut dyn UserDisplay) {
        let lines = Command::KNOWN
            .iter()
            .map(|command| format!("  {}", command.usage()))
            .collect::<Vec<_>>()
            .join("\n");
        display.show_message(&format!("Available commands:\n{}", lines));
    }
}

/// First `N` arguments, or a usage error naming the command.
fn required<'a, const N: usize>(command: &Command, args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|slice| <[&str; N]>::try_from(slice).ok())
        .ok_or(CommandError::MissingArguments {
            command: command.name(),
            usage: command.usage(),
        })
}

fn find_mut<'d>(directory: &'d mut Directory, name: &str) -> CommandResult<&'d mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()).into())
}
