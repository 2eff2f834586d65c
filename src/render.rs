use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::RenderArgs;
use crate::richtext::{self, Document};

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let doc_path = PathBuf::from(&args.doc);
    let raw = std::fs::read_to_string(&doc_path)
        .with_context(|| format!("read rich text document: {}", doc_path.display()))?;
    let document: Document = serde_json::from_str(&raw).context("parse rich text document")?;

    let html = richtext::render(Some(&document));

    match args.out {
        Some(out) => {
            let out_path = PathBuf::from(&out);
            let mut file = OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&out_path)
                .with_context(|| format!("create fragment: {}", out_path.display()))?;
            file.write_all(html.as_bytes())
                .with_context(|| format!("write fragment: {}", out_path.display()))?;
            tracing::info!(out = %out_path.display(), bytes = html.len(), "wrote fragment");
        }
        None => println!("{html}"),
    }

    Ok(())
}
