use thiserror::Error;

pub type Result<T> = std::result::Result<T, GreenfieldError>;

#[derive(Debug, Error)]
pub enum GreenfieldError {
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Inconsistent response envelope: {message}")]
    InconsistentEnvelope { message: String },
}
