use flock_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("flock configuration error: {0}")]
    Config(#[from] FlockError),

    #[error("delta time must be finite and positive (got {0})")]
    InvalidDeltaTime(f32),
}

pub type SimResult<T> = Result<T, SimError>;
