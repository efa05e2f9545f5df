//! Command layer: parsing, dispatch, and error translation.
//!
//! Input lines look like `<command> <arg1> <arg2> ...`. The command token is
//! case-insensitive; arguments are passed through verbatim.

mod clock;
mod handler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use handler::{CommandHandler, Outcome};

/// Every command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
    /// Anything else, lower-cased
    Unknown(String),
}

impl Command {
    /// Commands listed by `help`, in display order.
    pub const KNOWN: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::RemovePhone,
        Command::Delete,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Help,
        Command::Exit,
    ];

    /// Map a command token (any case) to a command.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Canonical token for the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Unknown(_) => "unknown",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> [phone]",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::Help => "help",
            Command::Exit => "close | exit",
            Command::Unknown(_) => "help",
        }
    }
}

/// Split a line into its command and arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = Command::from_token(parts.next()?);
    Some((command, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_arguments() {
        let (command, args) = parse_input("add John 1234567890").unwrap();
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["John", "1234567890"]);
    }

    #[test]
    fn test_parse_input_is_case_insensitive_for_command_only() {
        let (command, args) = parse_input("  ADD-Birthday   John  12.06.1990 ").unwrap();
        assert_eq!(command, Command::AddBirthday);
        assert_eq!(args, vec!["John", "12.06.1990"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t").is_none());
    }

    #[test]
    fn test_close_and_exit_are_aliases() {
        assert_eq!(Command::from_token("close"), Command::Exit);
        assert_eq!(Command::from_token("EXIT"), Command::Exit);
    }

    #[test]
    fn test_unknown_command_keeps_token() {
        assert_eq!(
            Command::from_token("Frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_known_commands_round_trip_through_name() {
        for command in Command::KNOWN.iter() {
            assert_eq!(&Command::from_token(command.name()), command);
        }
    }
}
