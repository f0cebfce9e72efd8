//! Driver layer
//!
//! Abstracts the external browser-automation engine behind the session
//! facade. The `webdriver` module speaks the WebDriver protocol through
//! `fantoccini`; the `mock` module serves scripted responses for tests.
//!
//! ## Module structure
//! - `traits`: driver and element-handle trait definitions
//! - `webdriver`: WebDriver-backed implementation
//! - `mock`: mock implementation for development/testing

pub mod traits;
pub mod webdriver;
pub mod mock;

#[cfg(test)]
mod tests;

pub use traits::{Driver, ElementHandle, Selector};

// Re-export implementation structs
pub use webdriver::{WebDriverClient, WebDriverElement};

// Re-export mock for development/testing
pub use mock::{MockDriver, MockElement};
