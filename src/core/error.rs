use std::fmt;

/// Errore di una operazione remota o di validazione del form.
///
/// Tutte le varianti vengono presentate allo stesso modo: banner con il
/// messaggio, nessuna retry policy. Il controller resta utilizzabile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection-level failure: DNS, refused connection, timeout,
    /// interrupted body.
    Network(String),

    /// The remote store answered with a non-2xx status.
    Rejection { status: u16, message: String },

    /// The response body was not the JSON shape the collection contract
    /// promises (e.g. not an array).
    Malformed(String),

    /// The draft failed local validation; no request was issued.
    Validation(String),

    /// The edit targeted an id that is not part of the last loaded
    /// collection (it may have been deleted by another session).
    StaleEdit(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn rejection(status: u16, message: impl Into<String>) -> Self {
        ApiError::Rejection {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::Malformed(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn stale_edit(id: impl fmt::Display) -> Self {
        ApiError::StaleEdit(format!("no loaded record with id {}", id))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {}", message),
            ApiError::Rejection { status, message } => {
                write!(f, "request rejected ({}): {}", status, message)
            }
            ApiError::Malformed(message) => write!(f, "malformed response: {}", message),
            ApiError::Validation(message) => write!(f, "validation error: {}", message),
            ApiError::StaleEdit(message) => write!(f, "stale edit target: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
