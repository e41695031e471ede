use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to open wheel file. Ensure wheels.txt is located in the working directory. ({0})")]
    WheelFile(#[source] io::Error),

    #[error("Invalid value for wheel count in wheels.txt: {0:?}. Expecting number greater than 0.")]
    InvalidWheelCount(String),

    #[error("Invalid value for letters per wheel in wheels.txt: {0:?}. Expecting number greater than 0.")]
    InvalidLettersPerWheel(String),

    #[error("Unexpected token {0:?} after the wheel count and letters per wheel.")]
    UnexpectedHeaderToken(String),

    #[error("Wheel file declared {expected} wheels but only {found} were found.")]
    MissingWheels { expected: usize, found: usize },

    #[error("Wheel {wheel} contained insufficient letters.")]
    InsufficientLetters { wheel: usize },

    #[error("Non-alphabetical character {found:?} found on wheel {wheel}. Ensure only characters a-z or A-Z are used.")]
    NonAlphabetic { wheel: usize, found: char },

    #[error("Wheel {wheel} contained too many letters.")]
    TooManyLetters { wheel: usize },

    #[error("Unable to open dictionary file. Ensure dictionary.txt is located in the working directory. ({0})")]
    DictionaryFile(#[source] io::Error),

    /// Line numbers are 1-based.
    #[error("Word on line {line} of the dictionary exceeded maximum length of {max} characters!")]
    WordTooLong { line: usize, max: usize },

    #[error("Failed to write results: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Problems with the wheel file, raised before any matching happens.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::WheelFile(_)
                | Error::InvalidWheelCount(_)
                | Error::InvalidLettersPerWheel(_)
                | Error::UnexpectedHeaderToken(_)
                | Error::MissingWheels { .. }
                | Error::InsufficientLetters { .. }
                | Error::NonAlphabetic { .. }
                | Error::TooManyLetters { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
