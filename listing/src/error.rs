use crate::notice::Notice;
use payloads::ClientError;

pub const NON_JSON_MESSAGE: &str = "Server returned a non-JSON response. \
                                    The server may be down or returning an \
                                    error.";
pub const UNKNOWN_MESSAGE: &str = "Unknown error occurred";
pub const MALFORMED_MESSAGE: &str = "Invalid response format";

/// Why a fetch produced no usable page.
///
/// The display string is the message surfaced in a list view's error
/// banner; [`FetchError::notice`] is the toast raised alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The body was JSON but not a page envelope.
    #[error("{}", MALFORMED_MESSAGE)]
    Malformed { detail: String },
    /// The body could not be decoded as JSON at all.
    #[error("{}", NON_JSON_MESSAGE)]
    NonJson { detail: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response was received.
    #[error("{message}")]
    Network { message: String },
    #[error("{}", UNKNOWN_MESSAGE)]
    Unknown,
}

impl FetchError {
    /// A status error, using the response text as the message when there
    /// is any.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("Request failed with status code {status}")
        } else {
            body
        };
        Self::Status { status, message }
    }

    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Network { message }
        }
    }

    /// HTTP status attached to the failure, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The notice raised when this failure replaces the list with sample
    /// data.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Malformed { .. } => Notice::error(MALFORMED_MESSAGE)
                .with_description("Showing sample data instead."),
            Self::Status { status: 401, .. } => {
                Notice::error("Authentication error")
                    .with_description("Please log in again.")
            }
            Self::Status { status: 403, .. } => Notice::error("Access denied")
                .with_description(
                    "You don't have permission to view this data.",
                ),
            Self::Status { .. } => Notice::error("Failed to load data")
                .with_description(self.to_string()),
            Self::NonJson { .. } | Self::Network { .. } | Self::Unknown => {
                Notice::warning("Network error")
                    .with_description(
                        "Unable to connect to the server. Using sample data.",
                    )
            }
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::APIError(status, body) => {
                Self::status(status.as_u16(), body)
            }
            ClientError::Network(e) => match e.status() {
                Some(status) => Self::status(status.as_u16(), e.to_string()),
                None => Self::network(e.to_string()),
            },
            ClientError::NonJson(e) => Self::NonJson {
                detail: e.to_string(),
            },
            ClientError::Malformed(e) => Self::Malformed {
                detail: e.to_string(),
            },
        }
    }
}
