//! Bounded element polling
//!
//! Poll-until-present with a fixed interval. Lookup misses are retried until
//! the deadline; any other driver failure propagates immediately so callers
//! can tell "never appeared" from "driver crashed".

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::driver::traits::{Driver, ElementHandle, Selector};
use crate::{Error, Result};

/// Poll for an element until it is present or `timeout` elapses.
///
/// Returns `Ok(None)` on timeout. The lookup is attempted at least once, even
/// with a zero timeout.
pub(crate) async fn poll_for_element(
    driver: &Arc<dyn Driver>,
    by: Selector,
    selector: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<Option<Arc<dyn ElementHandle>>> {
    let deadline = Instant::now() + timeout;

    loop {
        match driver.find_element(by, selector).await {
            Ok(element) => return Ok(Some(element)),
            Err(Error::ElementNotFound(_)) => {
                if Instant::now() >= deadline {
                    debug!("element did not appear within {:?}: {} {}", timeout, by, selector);
                    return Ok(None);
                }
                tokio::time::sleep(interval).await;
            }
            Err(e) => return Err(e),
        }
    }
}
