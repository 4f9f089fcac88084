//! Score command - route URLs to model items and emit one record per model

use crate::config::AppConfig;
use crate::hub::HubClient;
use crate::metrics::EvaluatorSet;
use crate::reporters::NdjsonWriter;
use crate::scoring::Aggregator;
use crate::url::UrlRouter;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Non-blank, trimmed lines of a URL file
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("URL file not readable: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn aggregator(config: &AppConfig) -> Aggregator {
    let hub = Arc::new(HubClient::new(config.hub.clone()));
    Aggregator::new(config.scoring.clone(), EvaluatorSet::defaults(hub))
}

/// Score each model URL in order. Returns how many records failed to
/// write; those are reported on stderr and processing moves on.
pub fn score_all<W, I, S>(writer: &mut NdjsonWriter<W>, urls: I) -> usize
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut errors = 0;
    for url in urls {
        let url = url.as_ref();
        if let Err(e) = writer.write(url) {
            eprintln!("writer error for {}: {:#}", url, e);
            warn!("writer error for {}: {:#}", url, e);
            errors += 1;
        }
    }
    errors
}

pub fn run_url_file(path: &Path, config: &AppConfig) -> Result<()> {
    info!("Starting URL processing");

    let urls = match read_urls(path) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("fatal: {:#}", e);
            std::process::exit(1);
        }
    };

    let items = UrlRouter::new().route(&urls);
    for item in &items {
        debug!(
            "Model {} with {} dataset(s), {} code URL(s)",
            item.model_url,
            item.datasets.len(),
            item.code.len()
        );
    }

    let mut writer = NdjsonWriter::stdout(aggregator(config));
    let errors = score_all(&mut writer, items.iter().map(|item| &item.model_url));
    info!(
        "Finished URL processing: {} models, {} write errors",
        items.len(),
        errors
    );
    Ok(())
}

pub fn run_urls(urls: &[String], config: &AppConfig) -> Result<()> {
    let mut writer = NdjsonWriter::stdout(aggregator(config));
    let errors = score_all(&mut writer, urls);
    info!("Scored {} URLs, {} write errors", urls.len(), errors);
    Ok(())
}
