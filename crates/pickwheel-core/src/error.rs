use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Picker row requires exactly 3 children, got {0}")]
    ChildCount(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
