pub mod animation;
pub mod card;
pub mod config;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MessageCardError {
    #[error("No saved message at {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid message: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for MessageCardError {
    fn from(e: std::io::Error) -> Self {
        MessageCardError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for MessageCardError {
    fn from(e: serde_json::Error) -> Self {
        MessageCardError::Serialization(e.to_string())
    }
}

impl MessageCardError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Nothing saved yet, the user can write a card
            MessageCardError::NotFound(_) => true,
            MessageCardError::IOError(_) => false,
            // A corrupt save is replaced by the next write
            MessageCardError::Serialization(_) => true,
            MessageCardError::Validation(_) => true,
            MessageCardError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            MessageCardError::NotFound(_) => "No saved message found!".to_string(),
            MessageCardError::IOError(_) => "File system error occurred.".to_string(),
            MessageCardError::Serialization(_) => {
                "The saved message could not be read.".to_string()
            }
            MessageCardError::Validation(reason) => reason.clone(),
            MessageCardError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MessageCardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MessageCardError = io.into();
        assert!(matches!(err, MessageCardError::IOError(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        let err = MessageCardError::NotFound("message.json".to_string());
        assert_eq!(err.user_message(), "No saved message found!");
        assert!(err.is_recoverable());

        let err = MessageCardError::Validation("Message text is empty".to_string());
        assert_eq!(err.user_message(), "Message text is empty");
    }
}
