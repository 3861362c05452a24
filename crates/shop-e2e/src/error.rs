// Error types for shop-e2e
//
// Every failure a page object can raise carries enough context (selector,
// expected and actual values) to diagnose it without reopening the page.

use crate::wait::ElementState;
use thiserror::Error;

/// Result type alias for page object and fixture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by primitives, page objects and fixtures
#[derive(Debug, Error)]
pub enum Error {
    /// Page load did not complete in time
    #[error("Navigation timeout after {timeout_ms}ms navigating to '{url}'")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    /// Element never reached the state required before acting on it
    ///
    /// Raised by every wait-then-act primitive when its bounded wait expires.
    #[error("Element '{selector}' did not become {state} within {timeout_ms}ms")]
    ElementNotInteractable {
        selector: String,
        state: ElementState,
        timeout_ms: u64,
    },

    /// Observed value differs from the expected one
    #[error("{what}: expected '{expected}' but got '{actual}'")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    /// A list or row that must exist before per-item checks was missing
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Dropdown does not offer the requested value
    #[error("Option '{value}' is not available in '{selector}'")]
    OptionNotFound { selector: String, value: String },

    /// Invoice (or other) download never arrived or produced no data
    #[error("Download failed: {0}")]
    Download(String),

    /// Suite configuration could not be built
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error reported by the Playwright bindings
    #[error("Browser error: {0}")]
    Browser(#[from] playwright_rs::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Builds an assertion failure from anything displayable.
    pub fn assertion(
        what: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Error::Assertion {
            what: what.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns true for failures caused by a wait running out of time.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::NavigationTimeout { .. } | Error::ElementNotInteractable { .. } => true,
            Error::Browser(playwright_rs::Error::Timeout(_))
            | Error::Browser(playwright_rs::Error::NavigationTimeout { .. })
            | Error::Browser(playwright_rs::Error::AssertionTimeout(_)) => true,
            Error::Context(_, inner) => inner.is_timeout(),
            _ => false,
        }
    }
}

/// Fails with an [`Error::Assertion`] when `actual != expected`.
pub(crate) fn ensure_eq<T>(what: &str, expected: &T, actual: &T) -> Result<()>
where
    T: PartialEq + std::fmt::Display + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Error::assertion(what, expected, actual))
    }
}

/// Fails with an [`Error::Assertion`] when `actual` does not contain `expected`.
pub(crate) fn ensure_contains(what: &str, expected: &str, actual: &str) -> Result<()> {
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(Error::assertion(what, expected, actual))
    }
}
