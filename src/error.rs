use std::{io, sync::Arc};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
/// Safe CSV writer error
pub enum SafeCsvError {
    #[error("Configuration: {0}")]
    Configuration(String),

    #[error("I/O: {0}")]
    Io(Arc<io::Error>),
}

impl From<io::Error> for SafeCsvError {
    fn from(error: io::Error) -> Self {
        SafeCsvError::Io(Arc::new(error))
    }
}
