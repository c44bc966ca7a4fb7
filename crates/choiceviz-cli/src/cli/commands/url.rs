//! `choiceviz url` – print the request URL without fetching.

use anyhow::Result;
use choiceviz_core::url_model::preview_url;

use crate::cli::DateArgs;

pub fn url_for(base: &str, dates: &DateArgs) -> Result<String> {
    let endpoint = if dates.is_empty() {
        None
    } else {
        Some(dates.to_input(base).endpoint()?)
    };
    Ok(preview_url(base, endpoint.as_ref())?)
}

pub fn run_url(base: &str, dates: &DateArgs) -> Result<()> {
    println!("{}", url_for(base, dates)?);
    Ok(())
}
