//! Mock driver implementation for testing
//!
//! An in-memory driver that records every command it is given and serves
//! elements scripted by the test. Exported so hosts can exercise the session
//! facade without a browser.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::driver::traits::{Driver, ElementHandle, Selector};
use crate::Error;

type ElementKey = (Selector, String);

/// Mock driver
///
/// Elements are keyed by `(strategy, selector)`. A lookup for an unknown key
/// fails with `ElementNotFound` (single) or yields an empty vector (multi),
/// mirroring WebDriver semantics.
#[derive(Debug, Default)]
pub struct MockDriver {
    closed: AtomicBool,
    commands: Mutex<Vec<String>>,
    elements: Mutex<HashMap<ElementKey, Vec<Arc<MockElement>>>>,
    pending: Mutex<HashMap<ElementKey, (Instant, Vec<Arc<MockElement>>)>>,
    fault: Mutex<Option<String>>,
    page_source: Mutex<String>,
}

impl MockDriver {
    /// Create a new mock driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an element for `(by, selector)` lookups
    pub async fn add_element(&self, by: Selector, selector: &str, element: Arc<MockElement>) {
        self.elements
            .lock()
            .await
            .entry((by, selector.to_string()))
            .or_default()
            .push(element);
    }

    /// Script an element that only becomes visible after `delay`
    pub async fn reveal_element_after(
        &self,
        by: Selector,
        selector: &str,
        delay: Duration,
        element: Arc<MockElement>,
    ) {
        self.pending.lock().await.insert(
            (by, selector.to_string()),
            (Instant::now() + delay, vec![element]),
        );
    }

    /// Make every subsequent lookup fail with a driver fault
    pub async fn poison(&self, message: &str) {
        *self.fault.lock().await = Some(message.to_string());
    }

    /// Set the page source returned by `page_source`
    pub async fn set_page_source(&self, source: &str) {
        *self.page_source.lock().await = source.to_string();
    }

    /// All commands issued so far, in order
    pub async fn commands(&self) -> Vec<String> {
        self.commands.lock().await.clone()
    }

    /// Whether the session has been terminated
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    async fn record(&self, command: String) -> Result<(), Error> {
        self.commands.lock().await.push(command);
        if self.closed.load(Ordering::Relaxed) {
            return Err(Error::driver("session already terminated"));
        }
        Ok(())
    }

    async fn lookup(&self, by: Selector, selector: &str) -> Result<Vec<Arc<MockElement>>, Error> {
        if let Some(message) = self.fault.lock().await.as_deref() {
            return Err(Error::driver(message));
        }

        let key = (by, selector.to_string());

        // Promote any pending element whose reveal time has passed
        let due = {
            let mut pending = self.pending.lock().await;
            match pending.get(&key) {
                Some((at, _)) if Instant::now() >= *at => pending.remove(&key).map(|(_, e)| e),
                _ => None,
            }
        };

        let mut elements = self.elements.lock().await;
        if let Some(revealed) = due {
            elements.entry(key.clone()).or_default().extend(revealed);
        }

        Ok(elements.get(&key).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn goto(&self, url: &str) -> Result<(), Error> {
        self.record(format!("goto {}", url)).await
    }

    async fn page_source(&self) -> Result<String, Error> {
        self.record("page_source".to_string()).await?;
        Ok(self.page_source.lock().await.clone())
    }

    async fn find_element(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Arc<dyn ElementHandle>, Error> {
        self.record(format!("find {} {}", by, selector)).await?;
        self.lookup(by, selector)
            .await?
            .into_iter()
            .next()
            .map(|e| e as Arc<dyn ElementHandle>)
            .ok_or_else(|| Error::element_not_found(selector))
    }

    async fn find_elements(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>, Error> {
        self.record(format!("find_all {} {}", by, selector)).await?;
        Ok(self
            .lookup(by, selector)
            .await?
            .into_iter()
            .map(|e| e as Arc<dyn ElementHandle>)
            .collect())
    }

    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, Error> {
        self.record(format!("execute_script {} {:?}", script, args))
            .await?;
        Ok(Value::Null)
    }

    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), Error> {
        self.record(format!("set_implicit_wait {}ms", timeout.as_millis()))
            .await
    }

    async fn quit(&self) -> Result<(), Error> {
        self.record("quit".to_string()).await?;
        self.closed.store(true, Ordering::Relaxed);
        Ok(())
    }
}

/// Mock element handle
///
/// Records every action performed against it.
#[derive(Debug, Default)]
pub struct MockElement {
    id: String,
    text: String,
    attributes: HashMap<String, String>,
    actions: Mutex<Vec<String>>,
}

impl MockElement {
    /// Create a new mock element
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }

    /// Set the element's visible text
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Mock element ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All actions performed against this element, in order
    pub async fn actions(&self) -> Vec<String> {
        self.actions.lock().await.clone()
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    async fn click(&self) -> Result<(), Error> {
        self.actions.lock().await.push("click".to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        self.actions.lock().await.push("clear".to_string());
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<(), Error> {
        self.actions.lock().await.push(format!("send_keys {}", text));
        Ok(())
    }

    async fn text(&self) -> Result<String, Error> {
        Ok(self.text.clone())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, Error> {
        Ok(self.attributes.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_commands() {
        let driver = MockDriver::new();

        driver.goto("https://example.com").await.unwrap();
        driver.page_source().await.unwrap();

        let commands = driver.commands().await;
        assert_eq!(commands, vec!["goto https://example.com", "page_source"]);
    }

    #[tokio::test]
    async fn test_mock_lookup_miss() {
        let driver = MockDriver::new();

        let err = driver.find_element(Selector::Css, ".missing").await.unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));

        let all = driver.find_elements(Selector::Css, ".missing").await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_mock_lookup_hit() {
        let driver = MockDriver::new();
        let element = Arc::new(MockElement::new().with_text("Submit"));
        driver.add_element(Selector::Css, "button", element).await;

        let found = driver.find_element(Selector::Css, "button").await.unwrap();
        assert_eq!(found.text().await.unwrap(), "Submit");
    }

    #[tokio::test]
    async fn test_mock_poison() {
        let driver = MockDriver::new();
        driver.poison("renderer crashed").await;

        let err = driver.find_element(Selector::Css, "body").await.unwrap_err();
        assert!(matches!(err, Error::Driver(_)));
    }

    #[tokio::test]
    async fn test_mock_quit_twice() {
        let driver = MockDriver::new();

        driver.quit().await.unwrap();
        assert!(driver.is_closed());

        // Second quit forwards to a dead session
        assert!(driver.quit().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_element_actions() {
        let element = MockElement::new().with_attribute("href", "/home");

        element.click().await.unwrap();
        element.clear().await.unwrap();
        element.send_keys("hello").await.unwrap();

        assert_eq!(element.actions().await, vec!["click", "clear", "send_keys hello"]);
        assert_eq!(
            element.attribute("href").await.unwrap(),
            Some("/home".to_string())
        );
        assert_eq!(element.attribute("class").await.unwrap(), None);
    }
}
