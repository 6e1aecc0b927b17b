//! Retry and backoff for HTTP fetches.
//!
//! Timeouts, connection failures, throttling (429/503) and other 5xx are
//! retried with capped exponential backoff; everything else (notably 404,
//! which means the thumbnail does not exist) fails on the first attempt.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
