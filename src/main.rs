use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    folio::logging::init().context("init logging")?;

    let cli = folio::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        folio::cli::Command::Fetch(args) => {
            folio::fetch::run(args).await.context("fetch")?;
        }
        folio::cli::Command::Render(args) => {
            folio::render::run(args).context("render")?;
        }
        folio::cli::Command::Build(args) => {
            folio::build::run(args).await.context("build")?;
        }
    }

    Ok(())
}
