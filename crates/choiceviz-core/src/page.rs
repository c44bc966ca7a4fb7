//! Page controller: owns the cache and the visible state, and exposes one
//! handler per user action.
//!
//! Handlers take already collected input values, so the same controller
//! serves one-shot commands and the interactive session.

use crate::bundle::GameRecord;
use crate::cache::BundleCache;
use crate::details::GameDetails;
use crate::error::AppError;
use crate::render::{self, RenderFormat};
use crate::source::BundleSource;
use crate::url_model::{build_api_url, EndpointConfig, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointMode {
    #[default]
    Monthly,
    Range,
}

/// Raw form values for a fetch, before validation.
#[derive(Debug, Clone, Default)]
pub struct FetchInput {
    pub base_url: String,
    pub mode: EndpointMode,
    pub month: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl FetchInput {
    pub fn monthly(base_url: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            mode: EndpointMode::Monthly,
            month: Some(month.into()),
            ..Self::default()
        }
    }

    pub fn range(
        base_url: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            mode: EndpointMode::Range,
            start: Some(start.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// The endpoint selection, if the date inputs needed for `mode` are present.
    pub fn endpoint(&self) -> Result<EndpointConfig, AppError> {
        match self.mode {
            EndpointMode::Monthly => Ok(EndpointConfig::Monthly {
                month: required(&self.month, "month")?.parse()?,
            }),
            EndpointMode::Range => {
                let start: YearMonth = required(&self.start, "start month")?.parse()?;
                let end: YearMonth = required(&self.end, "end month")?.parse()?;
                Ok(EndpointConfig::Range { start, end })
            }
        }
    }

    /// Validate the inputs and build the request URL.
    pub fn validate(&self) -> Result<String, AppError> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::MissingInput("base URL"));
        }
        let endpoint = self.endpoint()?;
        build_api_url(&self.base_url, &endpoint)
    }
}

fn required<'a>(value: &'a Option<String>, what: &'static str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingInput(what))
}

/// Snapshot of what the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub error: Option<String>,
    pub search_visible: bool,
    pub is_filtered: bool,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct Page {
    cache: BundleCache,
    error: Option<String>,
    results_shown: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch handler. On success the cache is replaced and shown; on failure
    /// the message is recorded, results are hidden and the previous cache is
    /// kept for searching.
    pub fn fetch<S: BundleSource + ?Sized>(
        &mut self,
        source: &S,
        input: &FetchInput,
    ) -> Result<usize, AppError> {
        self.error = None;
        self.results_shown = false;

        let outcome = input.validate().and_then(|url| {
            tracing::info!("loading bundle from {}", url);
            source.load(&url).map(|records| (url, records))
        });

        match outcome {
            Ok((url, records)) => {
                let n = records.len();
                self.cache.store(records, url);
                self.results_shown = true;
                Ok(n)
            }
            Err(e) => {
                tracing::warn!("fetch failed: {}", e);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Search handler: filter the cached bundle and show the result.
    pub fn search(&mut self, term: &str) -> &[GameRecord] {
        self.cache.filter(term);
        self.results_shown = self.cache.search_visible();
        if self.results_shown {
            self.error = None;
        }
        self.displayed()
    }

    /// Clear handler: drop the cached bundle and hide results and search.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.error = None;
        self.results_shown = false;
    }

    /// Records currently on screen.
    pub fn displayed(&self) -> &[GameRecord] {
        if self.results_shown {
            self.cache.data()
        } else {
            &[]
        }
    }

    /// Details for the 1-based card position in the current view.
    pub fn details(&self, position: usize) -> Option<GameDetails> {
        position
            .checked_sub(1)
            .and_then(|i| self.displayed().get(i))
            .map(GameDetails::for_record)
    }

    pub fn render(&self, format: RenderFormat) -> String {
        render::render(self.displayed(), format)
    }

    pub fn cache(&self) -> &BundleCache {
        &self.cache
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> PageView {
        PageView {
            error: self.error.clone(),
            search_visible: self.cache.search_visible(),
            is_filtered: self.cache.is_filtered(),
            shown: self.displayed().len(),
            total: self.cache.original_data().len(),
        }
    }
}
