//! Unified error types for Webhelm

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Webhelm
#[derive(Error, Debug)]
pub enum Error {
    /// WebDriver server unreachable or session could not be established
    #[error("WebDriver unavailable: {0}")]
    DriverUnavailable(String),

    /// Unsupported selector strategy
    #[error("Unsupported selector type: {0} (expected \"css\" or \"xpath\")")]
    UnsupportedSelector(String),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Driver-level fault (protocol error, dead session, crashed browser)
    #[error("Driver error: {0}")]
    Driver(String),

    /// Script execution failed
    #[error("Script execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new unsupported-selector error
    pub fn unsupported_selector<S: Into<String>>(by: S) -> Self {
        Error::UnsupportedSelector(by.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(selector: S) -> Self {
        Error::ElementNotFound(selector.into())
    }

    /// Create a new driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Create a new script execution failed error
    pub fn script_execution_failed<S: Into<String>>(msg: S) -> Self {
        Error::ScriptExecutionFailed(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }
}

/// Map WebDriver command failures onto the local taxonomy.
///
/// Lookup misses become [`Error::ElementNotFound`] so the wait poll can retry
/// them; everything else is a driver fault and must surface to the caller.
impl From<fantoccini::error::CmdError> for Error {
    fn from(err: fantoccini::error::CmdError) -> Self {
        if err.is_no_such_element() {
            Error::ElementNotFound(err.to_string())
        } else {
            Error::Driver(err.to_string())
        }
    }
}

impl From<fantoccini::error::NewSessionError> for Error {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        Error::DriverUnavailable(format!(
            "{err}. No WebDriver server responded; start one first, \
             e.g. `chromedriver --port=9515` or `geckodriver --port 9515`"
        ))
    }
}
