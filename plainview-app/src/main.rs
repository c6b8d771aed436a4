//! Fetch one Wikipedia page and print its visible text.
//!
//! Pipeline: fetch → flatten to text nodes → filter → stdout. The target
//! URL is a fixed constant; the only runtime knobs are the logging
//! environment variables handled by `plainview-common`.

use anyhow::{Context, Result};
use plainview_common::observability::{LogConfig, init_logging};
use plainview_extract::{extract, text_nodes};
use plainview_http::{HttpClient, PageFetcher};
use url::Url;

const TARGET_URL: &str = "https://en.wikipedia.org/wiki/France";

/// Fetch `url` through the given transport and return its visible text.
async fn page_text(fetcher: &impl PageFetcher, url: &Url) -> Result<String> {
    let html = fetcher.fetch_text(url).await?;
    tracing::info!(url = %url, html_len = html.len(), "page.fetched");

    let nodes = text_nodes(&html);
    tracing::debug!(node_count = nodes.len(), "page.parsed");

    Ok(extract(&nodes))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LogConfig::default())?;

    let url = Url::parse(TARGET_URL).context("target URL is malformed")?;
    let client = HttpClient::new()?;

    println!("{}", page_text(&client, &url).await?);
    Ok(())
}
