//! Presentation of the current view.
//!
//! Every renderer is a pure function of the records slice: a header with the
//! bundle date of the first record, then one entry per game.

mod html;
mod text;

pub use html::{escape_html, render_html};
pub use text::render_text;

use serde::{Deserialize, Serialize};

use crate::bundle::GameRecord;

/// Shown when the first record has no bundle date.
pub const DATE_PLACEHOLDER: &str = "Date not available";
/// Shown instead of a grid when there is nothing to display.
pub const EMPTY_MESSAGE: &str = "No games found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Bundle date heading: taken from the first record.
pub fn bundle_heading(games: &[GameRecord]) -> &str {
    games
        .first()
        .and_then(|g| g.bundle_date.as_deref())
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DATE_PLACEHOLDER)
}

/// Render `games` in `format`.
pub fn render(games: &[GameRecord], format: RenderFormat) -> String {
    match format {
        RenderFormat::Text => render_text(games),
        RenderFormat::Html => render_html(games),
        RenderFormat::Json => render_json(games),
    }
}

/// Same envelope the endpoint returns, so output can be fed back in.
pub fn render_json(games: &[GameRecord]) -> String {
    let doc = serde_json::json!({ "data": games });
    // Serializing plain strings cannot fail.
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_uses_first_record() {
        let games = vec![
            GameRecord::new("a").with_bundle_date("July 2024"),
            GameRecord::new("b").with_bundle_date("June 2024"),
        ];
        assert_eq!(bundle_heading(&games), "July 2024");
    }

    #[test]
    fn heading_placeholder_when_absent() {
        assert_eq!(bundle_heading(&[GameRecord::new("a")]), DATE_PLACEHOLDER);
        assert_eq!(bundle_heading(&[]), DATE_PLACEHOLDER);
    }

    #[test]
    fn render_dispatches_on_format() {
        let games = vec![GameRecord::new("Hades").with_bundle_date("July 2024")];
        assert!(render(&games, RenderFormat::Text).starts_with("Bundle: July 2024"));
        assert!(render(&games, RenderFormat::Html).starts_with("<!DOCTYPE html>"));
        assert!(render(&games, RenderFormat::Json).contains("\"data\""));
        assert_eq!(RenderFormat::default(), RenderFormat::Text);
    }

    #[test]
    fn json_output_reparses_as_bundle() {
        let games = vec![GameRecord::new("Hades")
            .with_image("https://img/h.jpg")
            .with_bundle_date("July 2024")];
        let out = render_json(&games);
        assert!(out.contains("\"bundleDate\""));
        let back = crate::bundle::parse_bundle(out.as_bytes()).unwrap();
        assert_eq!(back, games);
    }
}
