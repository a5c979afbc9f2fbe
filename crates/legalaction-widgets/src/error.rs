//! Widget Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid widget configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid permalink prefix {prefix:?}: {source}")]
    InvalidPermalinkPrefix {
        prefix: String,
        #[source]
        source: regex::Error,
    },

    #[error("row {row:?} has no numeric primary key (got {value:?})")]
    InvalidPrimaryKey { row: String, value: Option<String> },
}

pub type Result<T> = std::result::Result<T, WidgetError>;
