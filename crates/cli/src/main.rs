//! brochure entry point.
//!
//! Populates a page file with the site's shared fragments and prints the
//! resulting HTML on stdout. Logging goes to stderr so the output can be
//! redirected straight into a file.
//!
//! Usage: `brochure <page.html> [page-path]`
//!
//! `page-path` is the path (or full URL) the page is served under and decides
//! which navigation entry is highlighted. It defaults to `/<file name>`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use brochure_client::{ContentLoader, Page};
use brochure_core::{AppConfig, DEFAULT_MAPPINGS};
use tracing_subscriber::EnvFilter;
use url::Url;

const USAGE: &str = "usage: brochure <page.html> [page-path]";

/// Path the page is served under: the path of a full URL, the argument
/// itself, or `/<file name>` when absent.
fn served_path(file: &Path, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => match Url::parse(arg) {
            Ok(url) => url.path().to_string(),
            Err(_) => arg.to_string(),
        },
        None => {
            let name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            format!("/{name}")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let mut args = std::env::args().skip(1);
    let Some(file) = args.next() else {
        bail!(USAGE);
    };
    let file = Path::new(&file);
    let page_path = served_path(file, args.next().as_deref());

    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, page = %page_path, "starting brochure");

    let html = tokio::fs::read_to_string(file).await.with_context(|| format!("failed to read {}", file.display()))?;

    let loader = ContentLoader::from_config(&config).context("failed to build content loader")?;
    let mut page = Page::new(page_path, html);
    let report = loader.populate_page(&mut page, DEFAULT_MAPPINGS).await;

    tracing::info!(
        loaded = report.loaded.len(),
        fallbacks = report.fallbacks.len(),
        active_page = report.active_page.as_deref().unwrap_or_default(),
        "done"
    );

    println!("{}", page.into_html());
    Ok(())
}
