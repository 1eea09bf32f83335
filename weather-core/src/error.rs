use thiserror::Error;

/// Why a single lookup attempt failed.
///
/// The `Display` text is what the view shows in its error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Any non-success HTTP status. The body is never inspected, so a bad
    /// API key or an outage reads the same as an unknown city.
    #[error("City not found")]
    CityNotFound,

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body was not a usable weather payload.
    #[error("{0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
