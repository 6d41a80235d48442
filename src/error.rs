use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch image: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("No food items detected.")]
    NoLabelsFound,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short, stable name of the failure class, used for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Decode(_) => "decode",
            Self::NoLabelsFound => "no_labels",
            Self::Llm(_) | Self::OpenAi(_) => "upstream_model",
            Self::Config(_) => "config",
            Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Io(_)
            | Self::AddrParse(_)
            | Self::Internal(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_labels_message() {
        assert_eq!(Error::NoLabelsFound.to_string(), "No food items detected.");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::NoLabelsFound.kind(), "no_labels");
        assert_eq!(Error::llm("boom").kind(), "upstream_model");
        assert_eq!(Error::config("missing key").kind(), "config");
        assert_eq!(Error::internal("oops").kind(), "unknown");
    }

    #[test]
    fn test_decode_error_conversion() {
        let err: Error = image::load_from_memory(b"not an image").unwrap_err().into();
        assert_eq!(err.kind(), "decode");
        assert!(err.to_string().starts_with("Failed to decode image"));
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            Error::llm("quota exceeded").to_string(),
            "LLM error: quota exceeded"
        );
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
    }
}
