//! Bundle GET over HTTP.
//!
//! Uses the curl crate (libcurl) for a blocking GET with a JSON content type,
//! then hands the body to [`crate::bundle::parse_bundle`] for shape
//! validation. Transport failures and HTTP status failures are reported as
//! different error kinds.

mod status;

use std::str;
use std::time::Duration;

use crate::bundle::{parse_bundle, GameRecord};
use crate::config::ChoicevizConfig;
use crate::error::AppError;

/// Transport settings. Defaults: no timeouts, follow redirects.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub follow_redirects: bool,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            timeout: None,
            follow_redirects: true,
            user_agent: None,
        }
    }
}

impl From<&ChoicevizConfig> for FetchOptions {
    fn from(cfg: &ChoicevizConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            follow_redirects: cfg.follow_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    opts: FetchOptions,
}

impl Fetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    /// GET `url` and return the body of a 2xx response.
    ///
    /// Runs in the current thread.
    pub fn get(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(AppError::Network)?;
        easy.get(true).map_err(AppError::Network)?;
        easy.follow_location(self.opts.follow_redirects)
            .map_err(AppError::Network)?;
        if let Some(d) = self.opts.connect_timeout {
            easy.connect_timeout(d).map_err(AppError::Network)?;
        }
        if let Some(d) = self.opts.timeout {
            easy.timeout(d).map_err(AppError::Network)?;
        }
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua).map_err(AppError::Network)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")
            .map_err(AppError::Network)?;
        list.append("Accept: application/json")
            .map_err(AppError::Network)?;
        easy.http_headers(list).map_err(AppError::Network)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        headers.push(s.trim_end().to_string());
                    }
                    true
                })
                .map_err(AppError::Network)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(AppError::Network)?;
            transfer.perform().map_err(|e| {
                tracing::warn!("GET {} failed before a response: {}", url, e);
                AppError::Network(e)
            })?;
        }

        let code = easy.response_code().map_err(AppError::Network)?;
        if !(200..300).contains(&code) {
            let status_text = status::reason_phrase(&headers, code);
            tracing::warn!("GET {} returned HTTP {} {}", url, code, status_text);
            return Err(AppError::Http {
                status: code,
                status_text,
            });
        }

        tracing::debug!("GET {} -> {} ({} bytes)", url, code, body.len());
        Ok(body)
    }

    /// GET `url` and validate the body as a bundle listing.
    pub fn fetch_bundle(&self, url: &str) -> Result<Vec<GameRecord>, AppError> {
        let body = self.get(url)?;
        let records = parse_bundle(&body)?;
        tracing::info!("fetched {} records from {}", records.len(), url);
        Ok(records)
    }
}
