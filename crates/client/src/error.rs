/// Errors raised while assembling or sending a catalog request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Search terms of an unsupported shape.
    #[error("{0}")]
    InvalidInput(String),

    /// A helper was called with an argument of the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// A resource or category name failed its allow-list.
    #[error("{0}")]
    NotAllowed(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Http {
        status: u16,
        /// The server's `message` field, or the raw body when absent.
        message: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}
