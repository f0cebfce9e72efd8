//! Session layer
//!
//! Provides [`BrowserSession`], the thread-synchronized facade over one
//! browser driver handle. Construction is serialized behind a process-wide
//! lock; subsequent operations delegate to the driver one-to-one.
//!
//! ## Module structure
//! - `browser`: the session facade
//! - `wait`: bounded poll-until-present helper

pub mod browser;
mod wait;


pub use browser::{BrowserSession, DEFAULT_SCROLL_AMOUNT};
