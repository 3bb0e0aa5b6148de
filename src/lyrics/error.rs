use thiserror::Error;

/// Why a single source produced no lyric. Never escapes the source chain.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection failure or timeout
    #[error("network error: {message}")]
    Network { message: String, timed_out: bool },

    /// Response body did not have the expected shape
    #[error("parse error: {0}")]
    Parse(String),

    /// Source answered, but the validator rejected the text
    #[error("content rejected: {0}")]
    ContentInvalid(String),
}

impl SourceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            timed_out: true,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { timed_out: true, .. } => "timeout",
            Self::Network { .. } => "network",
            Self::Parse(_) => "parse",
            Self::ContentInvalid(_) => "content_invalid",
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(SourceError::network("refused").kind(), "network");
        assert_eq!(SourceError::timeout("10s elapsed").kind(), "timeout");
        assert_eq!(SourceError::parse("bad json").kind(), "parse");
    }

    #[test]
    fn test_json_error_is_parse() {
        let err: SourceError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
