//! Standalone HTML document with the image grid.

use std::fmt::Write;

use super::{bundle_heading, EMPTY_MESSAGE};
use crate::bundle::GameRecord;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
.games-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1rem}\
.game-card{border:1px solid #ccc;border-radius:8px;overflow:hidden}\
.game-image{width:100%;display:block}\
.image-error{display:flex;align-items:center;justify-content:center;height:120px;background:#eee}\
.game-title{padding:.5rem;font-weight:bold}";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_html(games: &[GameRecord]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Bundle games</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");

    if games.is_empty() {
        let _ = writeln!(out, "<div class=\"bundle-info\">{EMPTY_MESSAGE}</div>");
    } else {
        let _ = writeln!(
            out,
            "<div class=\"bundle-info\"><div class=\"bundle-date\">{}</div></div>",
            escape_html(bundle_heading(games))
        );
        out.push_str("<div class=\"games-grid\">\n");
        for g in games {
            write_card(&mut out, g);
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn write_card(out: &mut String, game: &GameRecord) {
    let title = escape_html(&game.title);
    match game.image_url() {
        Some(url) => {
            let url = escape_html(url);
            let _ = writeln!(
                out,
                "<a class=\"game-card\" href=\"{url}\" target=\"_blank\">\
<img src=\"{url}\" alt=\"{title}\" class=\"game-image\" loading=\"lazy\">\
<div class=\"game-title\">{title}</div></a>"
            );
        }
        None => {
            let _ = writeln!(
                out,
                "<div class=\"game-card\"><div class=\"image-error\">No image</div>\
<div class=\"game-title\">{title}</div></div>"
            );
        }
    }
}
