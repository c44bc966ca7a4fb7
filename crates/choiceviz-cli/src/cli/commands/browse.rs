//! `choiceviz browse` – line-oriented session over one page.
//!
//! Each input line is one user action, handled in order on this thread.

use anyhow::{Context, Result};
use choiceviz_core::config::ChoicevizConfig;
use choiceviz_core::fetch::{FetchOptions, Fetcher};
use choiceviz_core::page::{FetchInput, Page};
use choiceviz_core::render::RenderFormat;
use choiceviz_core::source::BundleSource;
use choiceviz_core::url_model::preview_url;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  month YYYY-MM            load one bundle month
  range YYYY-MM YYYY-MM    load every bundle between two months
  endpoint URL             change the base endpoint URL
  url                      show the URL the last selection builds
  search [TERM]            filter loaded games by title (empty shows all)
  clear                    drop loaded games
  show                     list the current games
  open N                   image of game N (as listed)
  save PATH                write the current games as an HTML page
  help                     this text
  quit                     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Month(String),
    Range(String, String),
    Endpoint(String),
    Url,
    Search(String),
    Clear,
    Show,
    Open(usize),
    Save(PathBuf),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let cmd = match (word.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("month", [m]) => SessionCommand::Month(m.to_string()),
        ("range", [s, e]) => SessionCommand::Range(s.to_string(), e.to_string()),
        ("endpoint", [u]) => SessionCommand::Endpoint(u.to_string()),
        ("url", []) => SessionCommand::Url,
        // The search term keeps its inner spaces.
        ("search", _) => SessionCommand::Search(rest.to_string()),
        ("clear", []) => SessionCommand::Clear,
        ("show", []) => SessionCommand::Show,
        ("open", [n]) => SessionCommand::Open(
            n.parse()
                .map_err(|_| format!("open expects a game number, got {n:?}"))?,
        ),
        ("save", [p]) => SessionCommand::Save(PathBuf::from(p)),
        ("help" | "?", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        (w, _) => return Err(format!("unknown or malformed command {w:?}; type help")),
    };
    Ok(Some(cmd))
}

/// Session state beyond the page itself: the endpoint and last date selection.
struct Session {
    page: Page,
    base_url: String,
    last_input: Option<FetchInput>,
}

impl Session {
    fn input_with_base(&self, input: FetchInput) -> FetchInput {
        FetchInput {
            base_url: self.base_url.clone(),
            ..input
        }
    }

    fn load<W: Write>(
        &mut self,
        source: &dyn BundleSource,
        input: FetchInput,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "Loading bundle from endpoint...")?;
        let input = self.input_with_base(input);
        let result = self.page.fetch(source, &input);
        self.last_input = Some(input);
        match result {
            Ok(_) => write!(out, "{}", self.page.render(RenderFormat::Text)),
            Err(_) => writeln!(out, "{}", self.page.error().unwrap_or_default()),
        }
    }

    fn handle<W: Write>(
        &mut self,
        source: &dyn BundleSource,
        cmd: SessionCommand,
        out: &mut W,
    ) -> Result<bool> {
        match cmd {
            SessionCommand::Month(m) => {
                self.load(source, FetchInput::monthly("", m), out)?;
            }
            SessionCommand::Range(s, e) => {
                self.load(source, FetchInput::range("", s, e), out)?;
            }
            SessionCommand::Endpoint(url) => {
                self.base_url = url;
                writeln!(out, "endpoint set to {}", self.base_url)?;
            }
            SessionCommand::Url => {
                let endpoint = match &self.last_input {
                    Some(input) => input.endpoint().ok(),
                    None => None,
                };
                match preview_url(&self.base_url, endpoint.as_ref()) {
                    Ok(url) => writeln!(out, "{url}")?,
                    Err(e) => writeln!(out, "{}", e.user_message())?,
                }
            }
            SessionCommand::Search(term) => {
                if !self.page.view().search_visible {
                    writeln!(out, "nothing loaded yet; use month or range first")?;
                } else {
                    self.page.search(&term);
                    write!(out, "{}", self.page.render(RenderFormat::Text))?;
                    let view = self.page.view();
                    if view.is_filtered {
                        writeln!(out, "({} of {} games match {:?})", view.shown, view.total, term.trim())?;
                    }
                }
            }
            SessionCommand::Clear => {
                self.page.clear();
                writeln!(out, "cleared")?;
            }
            SessionCommand::Show => {
                if let Some(err) = self.page.error() {
                    writeln!(out, "{err}")?;
                } else {
                    write!(out, "{}", self.page.render(RenderFormat::Text))?;
                }
            }
            SessionCommand::Open(n) => match self.page.details(n) {
                Some(details) => writeln!(out, "{}", details.message())?,
                None => writeln!(out, "no game number {n} in the current list")?,
            },
            SessionCommand::Save(path) => {
                fs::write(&path, self.page.render(RenderFormat::Html))
                    .with_context(|| format!("write {}", path.display()))?;
                writeln!(out, "saved {} games to {}", self.page.displayed().len(), path.display())?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Drive a session from `input` until EOF or `quit`. Returns the final page.
pub fn run_session<R: BufRead, W: Write>(
    source: &dyn BundleSource,
    base_url: String,
    input: R,
    out: &mut W,
) -> Result<Page> {
    let mut session = Session {
        page: Page::new(),
        base_url,
        last_input: None,
    };
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(cmd)) => {
                tracing::debug!("session command {:?}", cmd);
                if !session.handle(source, cmd, out)? {
                    break;
                }
            }
            Err(msg) => writeln!(out, "{msg}")?,
        }
        out.flush()?;
    }
    Ok(session.page)
}

pub fn run_browse(cfg: &ChoicevizConfig, base_url: String) -> Result<()> {
    let fetcher = Fetcher::new(FetchOptions::from(cfg));
    println!("choiceviz browse – endpoint {base_url}; type help for commands");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&fetcher, base_url, stdin.lock(), &mut stdout)?;
    Ok(())
}
