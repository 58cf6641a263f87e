use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No character class selected: enable at least one of uppercase, lowercase, digits, symbols")]
    NoClassSelected,

    #[error("Invalid length {0}: must be at least 1")]
    InvalidLength(usize),

    #[error("Length {requested} cannot cover {enabled} enabled character classes")]
    LengthTooShort { requested: usize, enabled: usize },

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type PfResult<T> = Result<T, PassForgeError>;
