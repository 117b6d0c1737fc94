use thiserror::Error;

#[derive(Debug, Error)]
pub enum DcError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bounding box is empty: no point has been added since the last reset")]
    NoBoundingBox,

    #[error("No clipping region is set")]
    EmptyClip,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = DcError::InvalidArgument("user scale must be non-zero".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: user scale must be non-zero"
        );
        assert_eq!(DcError::EmptyClip.to_string(), "No clipping region is set");
        assert!(DcError::NoBoundingBox.to_string().contains("empty"));
    }
}
