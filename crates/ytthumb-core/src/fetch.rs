//! Blocking HTTP GET / HEAD through libcurl.
//!
//! Used to download thumbnail bytes, to probe whether a thumbnail exists, and
//! to fetch a remote privacy-policy document. Every call is blocking; wrap in
//! `spawn_blocking` from async code.

use std::time::Duration;

use crate::config::ThumbConfig;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};

/// Per-request settings derived from `ThumbConfig`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
    pub retry: RetryPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions::from(&ThumbConfig::default())
    }
}

impl From<&ThumbConfig> for FetchOptions {
    fn from(cfg: &ThumbConfig) -> Self {
        FetchOptions {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
            retry: cfg.retry.as_ref().map(RetryPolicy::from).unwrap_or_default(),
        }
    }
}

/// Whether the image host serves an image at a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available { content_length: Option<u64> },
    Unavailable { status: u32 },
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available { .. })
    }
}

/// Only http(s) URLs are handed to curl.
fn validate(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

fn easy_for(url: &str, opts: &FetchOptions) -> Result<curl::easy::Easy, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }
    Ok(easy)
}

fn check_status(easy: &mut curl::easy::Easy) -> Result<u32, FetchError> {
    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(code)
}

fn get_once(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    let mut easy = easy_for(url, opts)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    check_status(&mut easy)?;
    Ok(body)
}

/// GET `url` and return the body. Transient failures are retried per
/// `opts.retry`; a non-2xx final status is `FetchError::Http`.
pub fn get(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    validate(url)?;
    let body = run_with_retry(&opts.retry, || get_once(url, opts))?;
    tracing::debug!(url = %url, bytes = body.len(), "GET complete");
    Ok(body)
}

fn head_once(url: &str, opts: &FetchOptions) -> Result<Option<u64>, FetchError> {
    let mut easy = easy_for(url, opts)?;
    easy.nobody(true)?;
    easy.perform()?;
    check_status(&mut easy)?;
    let length = easy.content_length_download()?;
    Ok((length >= 0.0).then_some(length as u64))
}

/// HEAD `url` to see whether an image is served there. 4xx answers are
/// `Unavailable`; transport failures and exhausted retries are errors.
pub fn probe(url: &str, opts: &FetchOptions) -> Result<Availability, FetchError> {
    validate(url)?;
    match run_with_retry(&opts.retry, || head_once(url, opts)) {
        Ok(content_length) => Ok(Availability::Available { content_length }),
        Err(FetchError::Http(status)) if (400..500).contains(&status) => {
            tracing::debug!(url = %url, status, "image not available");
            Ok(Availability::Unavailable { status })
        }
        Err(e) => Err(e),
    }
}
