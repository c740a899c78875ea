use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Refusing to embed an empty blob")]
    EmptyBlob,

    #[error("Invalid C identifier: {0:?}")]
    InvalidSymbol(String),

    #[error("Invalid gamma parameters: {0}")]
    InvalidGammaParams(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed array literal: {0}")]
    MalformedArray(String),

    #[error("Header does not match blob: {0}")]
    VerificationFailed(String),

    #[error("APP_VERSION not found in {0}")]
    VersionNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
