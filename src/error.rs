use std::fmt;

use crate::table::MAX_IDENTIFIERS;

pub const EXIT_SUCCESS: u8 = 0;
/// No expression tree: the formula did not parse.
pub const EXIT_PARSE: u8 = 1;
/// More than [`MAX_IDENTIFIERS`] distinct identifiers.
pub const EXIT_CAPACITY: u8 = 2;
/// Bad command line (`EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;
/// The formula could not be read (`EX_IOERR`).
pub const EXIT_IO: u8 = 74;

/// Error produced while parsing a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    /// Byte offset into the input.
    offset: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Error type for a bitgen run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The formula could not be parsed, so there is no tree to work on.
    Parse(ParseError),
    /// The formula uses more distinct identifiers than the enumerator supports.
    CapacityExceeded { found: usize, max: usize },
}

impl Error {
    pub fn capacity_exceeded(found: usize) -> Self {
        Error::CapacityExceeded {
            found,
            max: MAX_IDENTIFIERS,
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Parse(_) => EXIT_PARSE,
            Error::CapacityExceeded { .. } => EXIT_CAPACITY,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::CapacityExceeded { found, max } => {
                write!(f, "More than {} identifiers not supported yet (found {})", max, found)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::CapacityExceeded { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let parse = Error::from(ParseError::new("unexpected end of input", 0));
        let capacity = Error::capacity_exceeded(5);
        assert_eq!(parse.exit_code(), 1);
        assert_eq!(capacity.exit_code(), 2);
        let codes = [EXIT_SUCCESS, EXIT_PARSE, EXIT_CAPACITY, EXIT_USAGE, EXIT_IO];
        for (i, a) in codes.iter().enumerate() {
            assert!(codes[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn test_display() {
        let e = Error::capacity_exceeded(5);
        assert_eq!(e.to_string(), "More than 4 identifiers not supported yet (found 5)");
        let e = Error::from(ParseError::new("expected ')'", 7));
        assert_eq!(e.to_string(), "Parse error: expected ')' at offset 7");
    }
}
