//! Plain-text listing for terminals.

use std::fmt::Write;

use super::{bundle_heading, EMPTY_MESSAGE};
use crate::bundle::GameRecord;

pub fn render_text(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let mut out = String::new();
    let _ = writeln!(out, "Bundle: {}", bundle_heading(games));
    let _ = writeln!(out, "{:>4}  {:<48}  {}", "#", "TITLE", "IMAGE");
    for (i, g) in games.iter().enumerate() {
        let image = g.image_url().unwrap_or("(no image)");
        let _ = writeln!(out, "{:>4}  {:<48}  {}", i + 1, g.title, image);
    }
    out
}
