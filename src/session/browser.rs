//! Browser session facade
//!
//! A thread-synchronized facade over one browser driver handle. Construction
//! is serialized behind a process-wide lock; every other operation delegates
//! straight to the driver, followed by a fixed settle pause where the
//! underlying action needs time to take effect.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::config::SessionConfig;
use crate::driver::traits::{Driver, ElementHandle, Selector};
use crate::driver::webdriver::WebDriverClient;
use crate::session::wait;
use crate::Result;

/// Conventional scroll offset in pixels
pub const DEFAULT_SCROLL_AMOUNT: i64 = 500;

/// Serializes session construction across the process. Operations after
/// construction do not take this lock; hosts that share one session across
/// tasks own any further serialization.
static CONSTRUCT_LOCK: Mutex<()> = Mutex::const_new(());

/// Browser session
///
/// Owns one driver handle for its lifetime, created on [`connect`] and
/// terminated on [`close`]. Element handles returned by lookups are owned by
/// the caller; the session does not track them.
///
/// [`connect`]: BrowserSession::connect
/// [`close`]: BrowserSession::close
#[derive(Debug)]
pub struct BrowserSession {
    driver: Arc<dyn Driver>,
    config: SessionConfig,
}

impl BrowserSession {
    /// Open a new browser session against the configured WebDriver endpoint.
    ///
    /// Fails with [`Error::DriverUnavailable`](crate::Error::DriverUnavailable)
    /// when no WebDriver server is reachable; any other construction failure
    /// is logged and propagated unchanged.
    pub async fn connect(config: SessionConfig) -> Result<Self> {
        let _guard = CONSTRUCT_LOCK.lock().await;

        info!("Connecting browser session to {}", config.webdriver_url);
        let driver = match WebDriverClient::connect(&config.webdriver_url).await {
            Ok(driver) => driver,
            Err(e) => {
                error!("Failed to establish browser session: {}", e);
                return Err(e);
            }
        };

        Self::setup(Arc::new(driver), config).await
    }

    /// Build a session over an externally supplied driver.
    ///
    /// Used by hosts with a custom [`Driver`] implementation and by tests
    /// running against [`MockDriver`](crate::driver::MockDriver). Applies the
    /// same construction lock and implicit wait as [`connect`].
    ///
    /// [`connect`]: BrowserSession::connect
    pub async fn with_driver(driver: Arc<dyn Driver>, config: SessionConfig) -> Result<Self> {
        let _guard = CONSTRUCT_LOCK.lock().await;
        Self::setup(driver, config).await
    }

    async fn setup(driver: Arc<dyn Driver>, config: SessionConfig) -> Result<Self> {
        if let Err(e) = driver.set_implicit_wait(config.implicit_wait()).await {
            error!("Failed to apply implicit wait: {}", e);
            return Err(e);
        }

        info!("Browser session established");
        Ok(Self { driver, config })
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Navigate to a URL, then pause for the configured page settle delay.
    ///
    /// The pause is unconditional; no readiness check is performed.
    #[instrument(skip(self))]
    pub async fn navigate(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        tokio::time::sleep(self.config.page_settle()).await;
        Ok(())
    }

    /// Get the current rendered document source
    pub async fn page_source(&self) -> Result<String> {
        self.driver.page_source().await
    }

    /// Find a single element.
    ///
    /// `by` must be `"css"` or `"xpath"`; any other value fails with
    /// [`Error::UnsupportedSelector`](crate::Error::UnsupportedSelector)
    /// before any driver call. Zero matches propagate the driver's
    /// not-found error.
    #[instrument(skip(self))]
    pub async fn find_element(&self, selector: &str, by: &str) -> Result<Arc<dyn ElementHandle>> {
        let by = Selector::from_str(by)?;
        debug!("Finding element: {} {}", by, selector);
        self.driver.find_element(by, selector).await
    }

    /// Find all matching elements, possibly none.
    ///
    /// Same `by` constraint as [`find_element`](BrowserSession::find_element).
    #[instrument(skip(self))]
    pub async fn find_elements(
        &self,
        selector: &str,
        by: &str,
    ) -> Result<Vec<Arc<dyn ElementHandle>>> {
        let by = Selector::from_str(by)?;
        debug!("Finding elements: {} {}", by, selector);
        self.driver.find_elements(by, selector).await
    }

    /// Click an element, then pause for the configured click settle delay
    pub async fn click(&self, element: &Arc<dyn ElementHandle>) -> Result<()> {
        element.click().await?;
        tokio::time::sleep(self.config.click_settle()).await;
        Ok(())
    }

    /// Clear an element's existing content, then send `text` as keystrokes
    pub async fn type_text(&self, element: &Arc<dyn ElementHandle>, text: &str) -> Result<()> {
        element.clear().await?;
        element.send_keys(text).await
    }

    /// Get an element's visible text
    pub async fn get_text(&self, element: &Arc<dyn ElementHandle>) -> Result<String> {
        element.text().await
    }

    /// Get an element's attribute, `None` when absent
    pub async fn get_attribute(
        &self,
        element: &Arc<dyn ElementHandle>,
        name: &str,
    ) -> Result<Option<String>> {
        element.attribute(name).await
    }

    /// Scroll the page by `amount` pixels, then pause for the configured
    /// scroll settle delay
    #[instrument(skip(self))]
    pub async fn scroll(&self, amount: i64) -> Result<()> {
        self.driver
            .execute_script(
                "window.scrollBy(0, arguments[0])",
                vec![serde_json::json!(amount)],
            )
            .await?;
        tokio::time::sleep(self.config.scroll_settle()).await;
        Ok(())
    }

    /// Poll until an element matching `selector` is present.
    ///
    /// `timeout` defaults to the configured wait timeout. Returns `Ok(None)`
    /// when the element never appears within the timeout; lookup misses are
    /// retried at the configured poll interval, while any other driver
    /// failure propagates as an error.
    #[instrument(skip(self))]
    pub async fn wait_for_element(
        &self,
        selector: &str,
        by: &str,
        timeout: Option<Duration>,
    ) -> Result<Option<Arc<dyn ElementHandle>>> {
        let by = Selector::from_str(by)?;
        let timeout = timeout.unwrap_or_else(|| self.config.wait_timeout());

        wait::poll_for_element(
            &self.driver,
            by,
            selector,
            timeout,
            self.config.poll_interval(),
        )
        .await
    }

    /// Terminate the browser session.
    ///
    /// Not idempotent: a second call forwards to the driver again and
    /// surfaces whatever it returns.
    pub async fn close(&self) -> Result<()> {
        info!("Closing browser session");
        self.driver.quit().await
    }
}
