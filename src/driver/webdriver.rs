//! WebDriver-backed driver implementation
//!
//! Wraps a `fantoccini` client connected to a running WebDriver server
//! (Chromedriver, geckodriver, or a remote endpoint).

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::driver::traits::{Driver, ElementHandle, Selector};
use crate::Error;

/// WebDriver client
///
/// One browser session per instance. The inner `fantoccini::Client` is a
/// cheap handle onto the session's background task, so this type is `Clone`
/// and usable from multiple tasks; serialization of concurrent calls is the
/// host's concern.
#[derive(Clone, Debug)]
pub struct WebDriverClient {
    client: Client,
}

impl WebDriverClient {
    /// Connect to a WebDriver server and open a new browser session
    pub async fn connect(webdriver_url: &str) -> Result<Self, Error> {
        let client = ClientBuilder::native().connect(webdriver_url).await?;
        Ok(Self { client })
    }

    fn locator<'a>(by: Selector, selector: &'a str) -> Locator<'a> {
        match by {
            Selector::Css => Locator::Css(selector),
            Selector::XPath => Locator::XPath(selector),
        }
    }
}

#[async_trait]
impl Driver for WebDriverClient {
    async fn goto(&self, url: &str) -> Result<(), Error> {
        debug!("goto: {}", url);
        self.client.goto(url).await?;
        Ok(())
    }

    async fn page_source(&self) -> Result<String, Error> {
        Ok(self.client.source().await?)
    }

    async fn find_element(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Arc<dyn ElementHandle>, Error> {
        let element = self.client.find(Self::locator(by, selector)).await?;
        Ok(Arc::new(WebDriverElement { element }))
    }

    async fn find_elements(
        &self,
        by: Selector,
        selector: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>, Error> {
        let elements = self.client.find_all(Self::locator(by, selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| Arc::new(WebDriverElement { element }) as Arc<dyn ElementHandle>)
            .collect())
    }

    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, Error> {
        self.client
            .execute(script, args)
            .await
            .map_err(|e| Error::script_execution_failed(e.to_string()))
    }

    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), Error> {
        let timeouts = TimeoutConfiguration::new(None, None, Some(timeout));
        self.client.update_timeouts(timeouts).await?;
        Ok(())
    }

    async fn quit(&self) -> Result<(), Error> {
        // close() consumes the handle; clones all point at the same session
        self.client.clone().close().await?;
        Ok(())
    }
}

/// WebDriver element handle
#[derive(Debug)]
pub struct WebDriverElement {
    element: Element,
}

#[async_trait]
impl ElementHandle for WebDriverElement {
    async fn click(&self) -> Result<(), Error> {
        self.element.click().await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        self.element.clear().await?;
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<(), Error> {
        self.element.send_keys(text).await?;
        Ok(())
    }

    async fn text(&self) -> Result<String, Error> {
        Ok(self.element.text().await?)
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, Error> {
        Ok(self.element.attr(name).await?)
    }
}
