use thiserror;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("url strategy already registered for format: {0}")]
    DuplicateUrlStrategy(String),
    #[error("no url strategy registered for format: {0}")]
    UnknownFormat(String),

    #[error("settings facet already registered: {0}")]
    DuplicateFacet(String),
    #[error("no settings facet registered: {0}")]
    UnknownFacet(String),

    #[error("attribute path {path} blocked by non-object value at segment: {segment}")]
    AttributePathConflict { path: String, segment: String },

    #[error("field requires a value: {0}")]
    MissingFieldValue(String),
    #[error("unexpected value type for field: {0}")]
    FieldValueType(String),
    #[error("invalid url in field: {field}")]
    InvalidFieldUrl {
        field: String,
        #[source]
        source: url::ParseError,
    },

    #[error("config deserialization error")]
    ConfigError(#[from] serde_yaml::Error),
}
