//! Where bundle listings come from.
//!
//! The page controller only depends on this trait; [`Fetcher`] is the HTTP
//! implementation.

use crate::bundle::GameRecord;
use crate::error::AppError;
use crate::fetch::Fetcher;

/// Produces the records for an already built request URL.
pub trait BundleSource {
    fn load(&self, url: &str) -> Result<Vec<GameRecord>, AppError>;
}

impl BundleSource for Fetcher {
    fn load(&self, url: &str) -> Result<Vec<GameRecord>, AppError> {
        self.fetch_bundle(url)
    }
}

/// Serves a fixed JSON body for every URL. Used for offline listings and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: Vec<u8>,
}

impl StaticSource {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

impl BundleSource for StaticSource {
    fn load(&self, _url: &str) -> Result<Vec<GameRecord>, AppError> {
        crate::bundle::parse_bundle(&self.body)
    }
}
