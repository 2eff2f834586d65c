use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Fetch(FetchArgs),
    Render(RenderArgs),
    Build(BuildArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Content type id to fetch (e.g. `project`, `stat`).
    #[arg(long)]
    pub content_type: String,

    /// Maximum number of entries to fetch.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Use the preview API and token instead of the delivery API.
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Print one pretty JSON array instead of JSON lines.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input path to a rich-text document JSON file.
    #[arg(long)]
    pub doc: String,

    /// Output file path for the HTML fragment (default: stdout).
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory for `site.json` and description fragments.
    #[arg(long)]
    pub out: String,

    /// Use the preview API and token instead of the delivery API.
    #[arg(long, default_value_t = false)]
    pub preview: bool,
}
