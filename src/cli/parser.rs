//! Input parsing: split a line into a command word and its arguments.

use std::fmt;
use std::str::FromStr;

/// Commands the assistant understands.
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
    Help,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// The word that invokes this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Split `line` on whitespace into a lower-cased command word and its arguments.
///
/// A blank line yields an empty command and no arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(command) => (
            command.to_lowercase(),
            parts.map(str::to_string).collect(),
        ),
        None => (String::new(), Vec::new()),
    }
}
