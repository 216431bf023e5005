use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unknown style set: {0}")]
    UnknownStyleSet(String),

    #[error("unknown style state: {0}")]
    UnknownStyleState(String),

    #[error("unknown font family: {0}")]
    UnknownFontFamily(String),

    #[error("unknown font size: {0}")]
    UnknownFontSize(String),

    #[error("invalid color literal: {0}")]
    InvalidColor(String),

    #[error("no style node registered as {0}")]
    UnknownNode(String),

    #[error("failed to serialize style tree: {0}")]
    Serialize(#[from] serde_json::Error),
}
