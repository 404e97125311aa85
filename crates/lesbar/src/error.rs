use thiserror::Error;

#[derive(Error, Debug)]
pub enum LesbarError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid configuration: {message}")]
  InvalidConfig { message: String },
}

impl LesbarError {
  pub fn invalid_config(message: impl Into<String>) -> Self {
    Self::InvalidConfig { message: message.into() }
  }
}

pub type Result<T> = std::result::Result<T, LesbarError>;
