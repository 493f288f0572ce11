use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no numeric representation for {0}")]
    NumberRange(String),

    #[error("reading member `{name}`: {message}")]
    MemberRead { name: String, message: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
