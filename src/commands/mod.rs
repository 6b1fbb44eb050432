//! Command parsing and dispatch.
//!
//! This is the boundary between the interactive loop and the contact book:
//! a line of input is split into a command and its arguments, routed to a
//! handler, and the handler's reply is returned for printing unmodified.

pub mod handlers;

use crate::repositories::{ContactBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::NaiveDate;
use std::fmt;

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING_REPLY: &str = "How can I help you?";
pub const GOODBYE_MESSAGE: &str = "Good bye!";
pub const HELP_MESSAGE: &str = "Invalid command. Available commands: add (name phone), phone (name), change (name old_phone new_phone), add-birthday (name DD.MM.YYYY), show-birthday (name), birthdays, all, hello, exit, close.";

/// A recognized command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `exit` or `close`
    Exit,
    Unknown,
}

impl Command {
    /// Map an already lower-cased command token to a command.
    pub fn parse(name: &str) -> Self {
        match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line.
    Reply(String),
    /// Print the text and stop.
    Exit(String),
}

/// Split a line on whitespace into a lower-cased command and its arguments.
///
/// Arguments are passed through verbatim. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Run `command` against `book`.
///
/// `today` is used only by `birthdays`, which always looks 7 days ahead.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut ContactBook,
    today: NaiveDate,
) -> Outcome {
    tracing::debug!(%command, args = args.len(), "Dispatching command");

    let reply = match command {
        Command::Exit => return Outcome::Exit(GOODBYE_MESSAGE.to_string()),
        Command::Hello => GREETING_REPLY.to_string(),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::list_contacts(args, book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => {
            handlers::upcoming_birthdays(args, book, today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
        }
        Command::Unknown => HELP_MESSAGE.to_string(),
    };
    Outcome::Reply(reply)
}

/// Parse and run one line of input. Blank lines yield `None`.
pub fn handle_line(line: &str, book: &mut ContactBook, today: NaiveDate) -> Option<Outcome> {
    let (name, args) = parse_input(line)?;
    Some(dispatch(Command::parse(&name), &args, book, today))
}
