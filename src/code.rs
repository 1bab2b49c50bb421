//! Parse result codes and the failure taxonomy.
//!
//! Every `parse` call resolves to one `i32` code. Success codes come from
//! the constants below; failure codes are carried by [`ParseError`], which
//! also formats the diagnostic message handed to the active error handler.
//! Command and help actions may return arbitrary codes of their own, which
//! pass through the engine unchanged.

use std::error::Error;
use std::fmt;

/// Parse completed with all required bindings satisfied.
pub const SUCCESSFUL: i32 = 0;
/// A help name was matched and its callback ran. Embedding binaries
/// usually normalize this to a success exit status.
pub const SUCCESSFUL_HELP: i32 = 1;
/// No tokens at all although a leading program path was expected.
pub const MISSING_PATH: i32 = 2;
/// The front token matched neither a declared command nor the help handler.
pub const UNKNOWN_COMMAND: i32 = 3;
/// The group declares commands but the token stream is exhausted.
pub const MISSING_COMMAND: i32 = 4;
/// A token in option position matched no declared name and the group has
/// no commands to fall back to.
pub const UNKNOWN_OPTION: i32 = 5;
/// A required positional binder had no token left to consume.
pub const MISSING_OPTION: i32 = 6;
/// A named option was matched but its value token is absent.
pub const MISSING_OPTION_VALUE: i32 = 7;
/// A token was present but failed type conversion for its binder.
pub const INVALID_OPTION_VALUE: i32 = 8;

/// A parse failure, carrying the offending token and binder names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Leading program path expected but no tokens exist.
    MissingPath,
    /// Commands are declared and the stream ran out before one matched.
    MissingCommand,
    /// Front token is not a command, not a help name.
    UnknownCommand(String),
    /// Front token is not an option name and no command fallback exists.
    UnknownOption(String),
    /// Required binder with nothing left to bind.
    MissingOption(String),
    /// Named option without a following value token.
    MissingOptionValue(String),
    /// Token present but rejected by the binder's conversion.
    InvalidOptionValue { value: String, option: String },
    /// A flag's storage refused the set.
    FlagRejected(String),
}

impl ParseError {
    /// The result code this failure resolves to.
    pub fn code(&self) -> i32 {
        match self {
            ParseError::MissingPath => MISSING_PATH,
            ParseError::MissingCommand => MISSING_COMMAND,
            ParseError::UnknownCommand(_) => UNKNOWN_COMMAND,
            ParseError::UnknownOption(_) => UNKNOWN_OPTION,
            ParseError::MissingOption(_) => MISSING_OPTION,
            ParseError::MissingOptionValue(_) => MISSING_OPTION_VALUE,
            ParseError::InvalidOptionValue { .. } => INVALID_OPTION_VALUE,
            ParseError::FlagRejected(_) => INVALID_OPTION_VALUE,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingPath => write!(f, "Missing path."),
            ParseError::MissingCommand => write!(f, "Missing command."),
            ParseError::UnknownCommand(name) => write!(f, "Unknown command '{}'.", name),
            ParseError::UnknownOption(name) => write!(f, "Unknown option '{}'.", name),
            ParseError::MissingOption(name) => write!(f, "Missing option '{}'.", name),
            ParseError::MissingOptionValue(name) => {
                write!(f, "Missing value of option '{}'.", name)
            }
            ParseError::InvalidOptionValue { value, option } => {
                write!(f, "Invalid value '{}' of option '{}'.", value, option)
            }
            ParseError::FlagRejected(name) => {
                write!(f, "Failed to set flag of option '{}'.", name)
            }
        }
    }
}

impl Error for ParseError {}

impl From<ParseError> for i32 {
    fn from(error: ParseError) -> Self {
        error.code()
    }
}
