//! Webhelm: thread-safe browser session facade
//!
//! This library wraps an external WebDriver-based browser driver in a session
//! facade intended for threaded host applications: navigation, element
//! lookup, click/type, scroll, and wait-for-element, with construction
//! serialized behind a process-wide lock.
//!
//! ```rust,no_run
//! use webhelm::{BrowserSession, SessionConfig};
//!
//! # async fn example() -> webhelm::Result<()> {
//! let session = BrowserSession::connect(SessionConfig::default()).await?;
//! session.navigate("https://example.com").await?;
//!
//! if let Some(button) = session.wait_for_element("button.accept", "css", None).await? {
//!     session.click(&button).await?;
//! }
//!
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;

pub mod driver;
pub mod session;

// Re-exports
pub use config::SessionConfig;
pub use driver::{Driver, ElementHandle, Selector};
pub use error::{Error, Result};
pub use session::{BrowserSession, DEFAULT_SCROLL_AMOUNT};

/// Webhelm library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
