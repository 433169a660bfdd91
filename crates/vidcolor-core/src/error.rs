//! Error type shared by the transform composer and the settings codecs.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color space {0} is not supported")]
    UnsupportedColorSpace(&'static str),
    #[error("malformed adjustment token: {0:?}")]
    MalformedToken(String),
    #[error("unknown adjustment field: {0:?}")]
    UnknownField(String),
    #[error("missing adjustment field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("unknown color range: {0:?}")]
    UnknownRange(String),
}
