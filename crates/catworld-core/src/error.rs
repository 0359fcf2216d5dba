//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    /// Process-wide setup (error reporting hooks) failed before the page started
    #[error("Startup error: {message}")]
    Startup { message: String },

    // ─────────────────────────────────────────────────────────────
    // Remote Fetch Errors
    // ─────────────────────────────────────────────────────────────
    /// Connection refused, DNS failure, or the request timed out
    #[error("Network failure: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status
    #[error("Bad response from {url}: HTTP {status}")]
    BadResponse { url: String, status: u16 },

    /// The body was not valid JSON or lacked a required field
    #[error("Malformed response body: {message}")]
    MalformedBody { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn bad_response(url: impl Into<String>, status: u16) -> Self {
        Self::BadResponse {
            url: url.into(),
            status,
        }
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error came from a remote fetch.
    ///
    /// Fetch failures are always collapsed into a placeholder by the
    /// component that issued the request.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::BadResponse { .. } | Error::MalformedBody { .. }
        )
    }

    /// Check if the page could not start at all
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::Startup { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
