//! Utility modules for browser I/O.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`delay`] - Timer-based sleep
//! - [`log`] - Console logging

mod fetch;
pub mod log;

pub use fetch::{RaceResult, fetch_json, race_with_timeout};

/// Sleep for `ms` milliseconds on the browser event loop.
///
/// Resolves immediately off wasm32, where there is no browser timer.
pub async fn delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}
