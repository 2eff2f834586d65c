use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::BuildArgs;
use crate::client::{Client, ClientConfig};
use crate::{fallback, richtext, site};

pub async fn run(args: BuildArgs) -> anyhow::Result<()> {
    let out_dir = PathBuf::from(&args.out);
    if out_dir.exists() {
        anyhow::bail!("build output directory already exists: {}", out_dir.display());
    }

    let config = ClientConfig::from_env(args.preview).context("load client config")?;
    let client = Client::new(config).context("build client")?;

    let data = match site::load(&client).await.context("load site data")? {
        Some(data) => data,
        None => {
            tracing::warn!("content api unavailable; using placeholder dataset");
            fallback::site_data()
        }
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create build dir: {}", out_dir.display()))?;

    let site_json_path = out_dir.join("site.json");
    let json = serde_json::to_string_pretty(&data).context("serialize site data")?;
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&site_json_path)
        .with_context(|| format!("create site.json: {}", site_json_path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("write site.json: {}", site_json_path.display()))?;
    file.write_all(b"\n").context("write site.json newline")?;

    let mut fragments = 0usize;
    for (idx, project) in data.projects.iter().enumerate() {
        let html = richtext::render_value(project.description.as_ref());
        if html.is_empty() {
            continue;
        }

        let descriptions_dir = out_dir.join("descriptions");
        std::fs::create_dir_all(&descriptions_dir)
            .with_context(|| format!("create descriptions dir: {}", descriptions_dir.display()))?;

        let fragment_path = descriptions_dir.join(format!("{:02}.html", idx + 1));
        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&fragment_path)
            .with_context(|| format!("create fragment: {}", fragment_path.display()))?;
        file.write_all(html.as_bytes())
            .with_context(|| format!("write fragment: {}", fragment_path.display()))?;
        fragments += 1;
    }

    tracing::info!(
        out = %out_dir.display(),
        projects = data.projects.len(),
        fragments,
        "build complete"
    );

    Ok(())
}
