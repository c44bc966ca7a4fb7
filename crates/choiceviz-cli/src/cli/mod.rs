//! CLI for choiceviz.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use choiceviz_core::config::{self, ChoicevizConfig};
use choiceviz_core::page::{EndpointMode, FetchInput};
use choiceviz_core::render::RenderFormat;
use std::path::PathBuf;

use commands::{run_browse, run_completions, run_fetch, run_man, run_url};

/// Top-level CLI for browsing monthly game bundles.
#[derive(Debug, Parser)]
#[command(name = "choiceviz")]
#[command(about = "choiceviz: fetch, search and render monthly game bundles", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Month selection shared by `url` and `fetch`.
#[derive(Debug, Clone, Default, Args)]
pub struct DateArgs {
    /// Single bundle month.
    #[arg(long, value_name = "YYYY-MM", conflicts_with_all = ["start", "end"])]
    pub month: Option<String>,
    /// First month of a range (requires --end).
    #[arg(long, value_name = "YYYY-MM", requires = "end")]
    pub start: Option<String>,
    /// Last month of a range (requires --start).
    #[arg(long, value_name = "YYYY-MM", requires = "start")]
    pub end: Option<String>,
}

impl DateArgs {
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.start.is_none() && self.end.is_none()
    }

    pub fn to_input(&self, base_url: &str) -> FetchInput {
        let mode = if self.start.is_some() || self.end.is_some() {
            EndpointMode::Range
        } else {
            EndpointMode::Monthly
        };
        FetchInput {
            base_url: base_url.to_string(),
            mode,
            month: self.month.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for RenderFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => RenderFormat::Text,
            FormatArg::Html => RenderFormat::Html,
            FormatArg::Json => RenderFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the request URL for a month or range (the base URL if no month is given).
    Url {
        #[command(flatten)]
        dates: DateArgs,
        /// Base endpoint URL (defaults to the configured endpoint).
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Fetch a bundle listing, optionally filter it, and render it.
    Fetch {
        #[command(flatten)]
        dates: DateArgs,
        /// Base endpoint URL (defaults to the configured endpoint).
        #[arg(long)]
        endpoint: Option<String>,
        /// Only keep games whose title contains this text (case-insensitive).
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
        /// Output format (defaults to the configured format).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Write the rendered output to a file instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Read a saved JSON response instead of requesting the endpoint.
        #[arg(long, value_name = "PATH")]
        from_file: Option<PathBuf>,
    },

    /// Interactive session: fetch, search, clear and open games line by line.
    Browse {
        /// Base endpoint URL (defaults to the configured endpoint).
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

fn load_config(path: Option<&PathBuf>) -> Result<ChoicevizConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url { dates, endpoint } => {
                let base = endpoint.unwrap_or_else(|| cfg.endpoint.clone());
                run_url(&base, &dates)?;
            }
            CliCommand::Fetch {
                dates,
                endpoint,
                search,
                format,
                output,
                from_file,
            } => {
                let base = endpoint.unwrap_or_else(|| cfg.endpoint.clone());
                let format = format.map(RenderFormat::from).unwrap_or(cfg.default_format);
                run_fetch(
                    &cfg,
                    &dates.to_input(&base),
                    search.as_deref(),
                    format,
                    output.as_deref(),
                    from_file.as_deref(),
                )?;
            }
            CliCommand::Browse { endpoint } => {
                let base = endpoint.unwrap_or_else(|| cfg.endpoint.clone());
                run_browse(&cfg, base)?;
            }
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
