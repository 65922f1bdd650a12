/// Errors raised while building transactions and filters, or acting on rows.
/// The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unrecognised command: {0}")]
    UnrecognisedCommand(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: &str) -> Error {
        Error::InvalidArgument(message.to_string())
    }
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
