use std::result;
use std::sync::Arc;
use log::SetLoggerError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("illegal state {0}")]
    IllegalState(String),

    #[error("logger error: {0}")]
    // arc is necessary, so that error class is cloneable.
    Logger(Arc<SetLoggerError>),
}

impl From<SetLoggerError> for Error {
    fn from(value: SetLoggerError) -> Self {
        Error::Logger(Arc::new(value))
    }
}
