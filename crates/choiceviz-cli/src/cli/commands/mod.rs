//! CLI command handlers. Each command is in its own file.

mod browse;
mod completions;
mod fetch;
mod url;

pub use browse::run_browse;
pub use completions::{run_completions, run_man};
pub use fetch::run_fetch;
pub use url::run_url;
