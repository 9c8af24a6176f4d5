use std::fmt;

/// Errors that can happen inside pulpit
#[derive(Debug)]
pub enum Error {
    // Upload validation errors (no network attempt is made for these)
    /// The selected media file does not exist, is empty, or is not usable
    MediaFileNotFound {
        /// Path to the offending file
        path: String,
        /// Additional context about the validation failure
        context: String,
    },
    /// The audio file's MIME type is not in the accepted set
    UnsupportedAudioFormat {
        /// The MIME type that was detected
        mime: String,
    },
    /// A submission was attempted while another one is still in flight
    UploadInFlight,
    /// Failed to assemble the multipart payload for an upload
    UploadPayloadInvalid {
        /// Path to the file being uploaded
        path: String,
        /// The underlying HTTP client error
        source: reqwest::Error,
    },

    // Backend errors
    /// The backend rejected a request with a non-success status
    BackendRejected {
        /// The operation that was rejected
        operation: String,
        /// The HTTP status code returned by the backend
        status: u16,
        /// The plain-text error body returned by the backend
        message: String,
    },
    /// The backend could not be reached at the network level
    BackendUnreachable {
        /// The operation that failed
        operation: String,
        /// The underlying HTTP client error
        source: reqwest::Error,
    },
    /// The backend returned a body that could not be decoded
    BackendResponseInvalid {
        /// The operation whose response failed to decode
        operation: String,
        /// The underlying decoding error
        source: reqwest::Error,
    },
    /// Failed to build the HTTP client
    HttpClientBuildFailed {
        /// The underlying HTTP client error
        source: reqwest::Error,
    },

    // Verse lookup errors
    /// The verse API rejected the lookup
    VerseLookupFailed {
        /// The scripture reference that was requested
        reference: String,
        /// The HTTP status code returned by the API
        status: u16,
    },
    /// The verse API could not be reached
    VerseUnreachable {
        /// The scripture reference that was requested
        reference: String,
        /// The underlying HTTP client error
        source: reqwest::Error,
    },
    /// The verse API returned a body that could not be decoded
    VerseResponseInvalid {
        /// The scripture reference that was requested
        reference: String,
        /// The underlying decoding error
        source: reqwest::Error,
    },

    // Terminal interface errors
    /// Terminal setup or input handling encountered an error
    TerminalSetupFailed {
        /// The error message
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MediaFileNotFound { path, context } => {
                write!(f, "Media file '{path}' not usable: {context}")
            }
            Error::UnsupportedAudioFormat { mime } => {
                write!(f, "Unsupported audio format '{mime}'")
            }
            Error::UploadInFlight => {
                write!(f, "Another upload is already in progress")
            }
            Error::UploadPayloadInvalid { path, source } => {
                write!(f, "Failed to build upload payload for '{path}': {source}")
            }
            Error::BackendRejected {
                operation,
                status,
                message,
            } => {
                write!(f, "{operation} rejected by backend ({status}): {message}")
            }
            Error::BackendUnreachable { operation, source } => {
                write!(f, "{operation} failed, backend not reachable: {source}")
            }
            Error::BackendResponseInvalid { operation, source } => {
                write!(f, "Failed to decode {operation} response: {source}")
            }
            Error::HttpClientBuildFailed { source } => {
                write!(f, "Failed to build HTTP client: {source}")
            }
            Error::VerseLookupFailed { reference, status } => {
                write!(f, "Failed to fetch Bible verse '{reference}' ({status})")
            }
            Error::VerseUnreachable { reference, source } => {
                write!(f, "Failed to fetch Bible verse '{reference}': {source}")
            }
            Error::VerseResponseInvalid { reference, source } => {
                write!(
                    f,
                    "Failed to decode verse response for '{reference}': {source}"
                )
            }
            Error::TerminalSetupFailed { message } => {
                write!(f, "Terminal setup error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UploadPayloadInvalid { source, .. } => Some(source),
            Error::BackendUnreachable { source, .. } => Some(source),
            Error::BackendResponseInvalid { source, .. } => Some(source),
            Error::HttpClientBuildFailed { source } => Some(source),
            Error::VerseUnreachable { source, .. } => Some(source),
            Error::VerseResponseInvalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_file_not_found_display() {
        let error = Error::MediaFileNotFound {
            path: "sermon.mp3".to_string(),
            context: "File is empty".to_string(),
        };
        assert!(error.to_string().contains("sermon.mp3"));
        assert!(error.to_string().contains("File is empty"));
    }

    #[test]
    fn test_unsupported_audio_format_display() {
        let error = Error::UnsupportedAudioFormat {
            mime: "text/plain".to_string(),
        };
        assert!(error.to_string().contains("text/plain"));
        assert!(error.to_string().contains("Unsupported audio format"));
    }

    #[test]
    fn test_backend_rejected_display() {
        let error = Error::BackendRejected {
            operation: "Upload".to_string(),
            status: 500,
            message: "Disk full".to_string(),
        };
        assert!(error.to_string().contains("500"));
        assert!(error.to_string().contains("Disk full"));
    }

    #[test]
    fn test_verse_lookup_failed_display() {
        let error = Error::VerseLookupFailed {
            reference: "John 3:16".to_string(),
            status: 404,
        };
        assert!(error.to_string().contains("John 3:16"));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_upload_in_flight_has_no_source() {
        use std::error::Error as StdError;
        assert!(StdError::source(&Error::UploadInFlight).is_none());
    }
}
