use std::fmt::Formatter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// A setter was handed a value it does not accept. The previous value is kept.
    InvalidArgument(String),
    /// `send_request` was called before the builder was fully configured.
    Precondition(&'static str),
    /// The request factory could not build a request.
    Request(anyhow::Error),
    /// The transport failed. The wrapped error is the transport's own.
    Transport(anyhow::Error),
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // both wrappers expose the wrapped error itself
        match self {
            Error::Request(e) | Error::Transport(e) => Some(&**e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
            Error::Precondition(message) => f.write_str(message),
            Error::Request(e) => write!(f, "Failed building request: {}", e),
            Error::Transport(e) => write!(f, "Transport failed: {}", e),
        }
    }
}
