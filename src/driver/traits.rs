//! Driver layer traits
//!
//! This module defines the abstract interface of the external browser driver
//! the session delegates to. The real implementation speaks WebDriver; the
//! mock implementation serves scripted responses for tests.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Selector strategy for element lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector
    Css,
    /// XPath expression
    XPath,
}

impl FromStr for Selector {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(Selector::Css),
            "xpath" => Ok(Selector::XPath),
            other => Err(crate::Error::unsupported_selector(other)),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Css => write!(f, "css"),
            Selector::XPath => write!(f, "xpath"),
        }
    }
}

/// Browser driver trait
///
/// The external collaborator behind the session facade: one long-lived
/// browser handle performing actual page interaction.
#[async_trait]
pub trait Driver: Send + Sync + fmt::Debug {
    /// Load a URL
    async fn goto(&self, url: &str) -> Result<(), crate::Error>;

    /// Get the current rendered document source
    async fn page_source(&self) -> Result<String, crate::Error>;

    /// Find a single element
    async fn find_element(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Arc<dyn ElementHandle>, crate::Error>;

    /// Find all matching elements (possibly empty, in document order)
    async fn find_elements(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>, crate::Error>;

    /// Execute JavaScript in the page
    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, crate::Error>;

    /// Set the driver-level implicit wait applied to element lookups
    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), crate::Error>;

    /// Terminate the browser session
    async fn quit(&self) -> Result<(), crate::Error>;
}

/// Element handle trait
///
/// An opaque reference to an on-page element, owned by the caller and valid
/// until page state invalidates it. The session does not track handles after
/// returning them.
#[async_trait]
pub trait ElementHandle: Send + Sync + fmt::Debug {
    /// Click the element
    async fn click(&self) -> Result<(), crate::Error>;

    /// Clear existing field content
    async fn clear(&self) -> Result<(), crate::Error>;

    /// Send text as keystrokes
    async fn send_keys(&self, text: &str) -> Result<(), crate::Error>;

    /// Get the element's visible text
    async fn text(&self) -> Result<String, crate::Error>;

    /// Get an attribute value, `None` when absent
    async fn attribute(&self, name: &str) -> Result<Option<String>, crate::Error>;
}
