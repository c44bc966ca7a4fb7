//! `choiceviz fetch` – fetch one bundle listing and render it.

use anyhow::{Context, Result};
use choiceviz_core::config::ChoicevizConfig;
use choiceviz_core::fetch::{FetchOptions, Fetcher};
use choiceviz_core::page::{FetchInput, Page};
use choiceviz_core::render::RenderFormat;
use choiceviz_core::source::{BundleSource, StaticSource};
use std::fs;
use std::path::Path;

/// Fetch, filter and render into a string. Fetch failures come back as the
/// user-facing message.
pub fn fetch_and_render(
    source: &dyn BundleSource,
    input: &FetchInput,
    search: Option<&str>,
    format: RenderFormat,
) -> Result<(Page, String)> {
    let mut page = Page::new();
    if let Err(e) = page.fetch(source, input) {
        anyhow::bail!("{}", e.user_message());
    }
    if let Some(term) = search {
        page.search(term);
    }
    let rendered = page.render(format);
    Ok((page, rendered))
}

pub fn run_fetch(
    cfg: &ChoicevizConfig,
    input: &FetchInput,
    search: Option<&str>,
    format: RenderFormat,
    output: Option<&Path>,
    from_file: Option<&Path>,
) -> Result<()> {
    let source: Box<dyn BundleSource> = match from_file {
        Some(path) => {
            let body = fs::read(path).with_context(|| format!("read {}", path.display()))?;
            Box::new(StaticSource::new(body))
        }
        None => Box::new(Fetcher::new(FetchOptions::from(cfg))),
    };
    let (page, rendered) = fetch_and_render(source.as_ref(), input, search, format)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("write {}", path.display()))?;
            let view = page.view();
            println!(
                "Wrote {} of {} games to {}",
                view.shown,
                view.total,
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
