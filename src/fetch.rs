use std::io::Write as _;

use anyhow::Context as _;

use crate::cli::FetchArgs;
use crate::client::{Client, ClientConfig};

pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    let config = ClientConfig::from_env(args.preview).context("load client config")?;
    let client = Client::new(config).context("build client")?;

    let mut options: Vec<(String, String)> = Vec::new();
    if let Some(limit) = args.limit {
        options.push(("limit".to_owned(), limit.to_string()));
    }

    let records = client
        .entries(&args.content_type, &options)
        .await?
        .ok_or_else(|| anyhow::anyhow!("collection unavailable: {}", args.content_type))?;

    tracing::debug!(
        content_type = %args.content_type,
        records = records.len(),
        "fetched collection"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        let json = serde_json::to_string_pretty(&records).context("serialize records")?;
        writeln!(out, "{json}").context("write records")?;
    } else {
        for record in &records {
            serde_json::to_writer(&mut out, record).context("serialize record")?;
            out.write_all(b"\n").context("write record newline")?;
        }
    }

    Ok(())
}
