use thiserror::Error;

#[derive(Error, Debug)]
pub enum StapleError {
    #[error("Invalid range [{lower}, {upper}): must span between 1 and 2^32 values")]
    InvalidRange { lower: i64, upper: i64 },

    #[error("No secure randomness available: {0}")]
    NoSecureRandomness(String),

    #[error("Wordlist is empty, load one before generating")]
    EmptyWordlist,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown wordlist: {0}")]
    UnknownWordlist(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StapleError>;
