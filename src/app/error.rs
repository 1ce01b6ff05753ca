//! Errors raised while reading and validating console input

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input '{0}'. Please enter a number.")]
    NotANumber(String),

    #[error("Invalid option {choice}. Please choose an option from 1 to {max}.")]
    UnknownOption { choice: String, max: u8 },

    #[error("Invalid input '{0}'. Please enter an integer.")]
    InvalidId(String),

    #[error("Invalid date format '{input}'. Due date will not be set.")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("input stream closed")]
    Eof,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;
