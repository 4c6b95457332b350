use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Environment variable error: {message}")]
    EnvVar { message: String },

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
