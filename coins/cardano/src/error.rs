use thiserror::Error;

/// Errors raised while deriving or decoding Cardano addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardanoError {
    #[error("Invalid {role} credential: expected {expected} bytes, got {actual}")]
    InvalidCredential {
        role: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid credential hex: {0}")]
    InvalidCredentialHex(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenient Result type using CardanoError
pub type Result<T> = std::result::Result<T, CardanoError>;

impl From<bech32::EncodeError> for CardanoError {
    fn from(err: bech32::EncodeError) -> Self {
        CardanoError::EncodingError(err.to_string())
    }
}

impl From<bech32::primitives::hrp::Error> for CardanoError {
    fn from(err: bech32::primitives::hrp::Error) -> Self {
        CardanoError::EncodingError(err.to_string())
    }
}

impl From<hex::FromHexError> for CardanoError {
    fn from(err: hex::FromHexError) -> Self {
        CardanoError::InvalidCredentialHex(err.to_string())
    }
}

impl From<serde_json::Error> for CardanoError {
    fn from(err: serde_json::Error) -> Self {
        CardanoError::ConfigError(err.to_string())
    }
}
