use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Process exit status for a failed run. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
