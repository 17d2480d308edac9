use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  filter <text>    show only names containing <text> (empty clears)
  name <text>      set the name input
  number <text>    set the number input
  add              save the form
  delete <row>     delete the contact shown at <row>
  refresh          reload contacts from the server
  help             show this text
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Name(String),
    Number(String),
    Add,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command, type `help` for a list")]
    Empty,

    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`delete` needs a row number")]
    MissingRow,

    #[error("`{0}` is not a row number")]
    BadRow(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(CommandError::Empty),
            "filter" | "f" => Ok(Command::Filter(rest.to_string())),
            "name" => Ok(Command::Name(rest.to_string())),
            "number" => Ok(Command::Number(rest.to_string())),
            "add" => Ok(Command::Add),
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingRow);
                }
                rest.parse()
                    .map(Command::Delete)
                    .map_err(|_| CommandError::BadRow(rest.to_string()))
            }
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
