use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("quantity must be UTF-8 text (invalid byte at offset {valid_up_to})")]
    NotText { valid_up_to: usize },

    #[error("cannot parse quantity '{input}': matched only '{consumed}'")]
    Syntax { input: String, consumed: String },

    #[error("unexpected trailing input '{rest}' in quantity '{input}' after '{consumed}'")]
    TrailingInput {
        input: String,
        consumed: String,
        rest: String,
    },
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::NotText {
            valid_up_to: e.valid_up_to(),
        }
    }
}
