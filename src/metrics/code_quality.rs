//! Code-quality metric
//!
//! Lints every Python file in the model repository with `pylint` and
//! averages the normalized ratings. Repositories without Python code, or
//! where nothing could be rated, score a neutral 0.5.

use crate::hub::{owner_and_name, HubClient};
use crate::metrics::MetricScorer;
use crate::models::MetricName;
use crate::url::hub_model_id;
use anyhow::{Context, Result};
use std::io::{Read, Seek, SeekFrom, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

const NEUTRAL: f64 = 0.5;
const PYLINT: &str = "pylint";
const PYLINT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CodeQualityScorer {
    hub: Arc<HubClient>,
}

impl CodeQualityScorer {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    fn rate_file(&self, source: &str) -> Result<Option<f64>> {
        let mut file = tempfile::Builder::new()
            .suffix(".py")
            .tempfile()
            .context("creating scratch file")?;
        file.write_all(source.as_bytes())?;
        file.flush()?;

        // Output goes to a scratch file so a chatty run cannot fill a pipe
        let mut report = tempfile::tempfile().context("creating report file")?;
        let mut child = Command::new(PYLINT)
            .args(["--output-format=text", "--score=yes"])
            .arg(file.path())
            .stdout(Stdio::from(report.try_clone()?))
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("spawning {}", PYLINT))?;

        let start = Instant::now();
        loop {
            if child.try_wait()?.is_some() {
                break;
            }
            if start.elapsed() > PYLINT_TIMEOUT {
                let _ = child.kill();
                let _ = child.wait();
                anyhow::bail!("{} timed out after {:?}", PYLINT, PYLINT_TIMEOUT);
            }
            std::thread::sleep(Duration::from_millis(50));
        }

        let mut output = String::new();
        report.seek(SeekFrom::Start(0))?;
        report.read_to_string(&mut output)?;
        Ok(parse_pylint_score(&output))
    }
}

impl MetricScorer for CodeQualityScorer {
    fn name(&self) -> MetricName {
        MetricName::CodeQuality
    }

    fn score(&self, url: &str) -> Result<Option<f64>> {
        let Some(model_id) = hub_model_id(url) else {
            return Ok(None);
        };
        if owner_and_name(&model_id).is_err() {
            return Ok(None);
        }
        let info = self.hub.model_info(&model_id)?;

        let python_files: Vec<&str> = info
            .siblings
            .iter()
            .map(|s| s.rfilename.as_str())
            .filter(|name| name.ends_with(".py"))
            .collect();
        if python_files.is_empty() {
            return Ok(Some(NEUTRAL));
        }

        let mut ratings = Vec::with_capacity(python_files.len());
        for path in python_files {
            let source = match self.hub.raw_file(&model_id, path) {
                Ok(source) => source,
                Err(e) => {
                    debug!("Skipping {}: {}", path, e);
                    continue;
                }
            };
            match self.rate_file(&source) {
                Ok(Some(rating)) => ratings.push(rating),
                Ok(None) => debug!("pylint produced no rating for {}", path),
                Err(e) => debug!("pylint failed on {}: {:#}", path, e),
            }
        }

        Ok(Some(average_or_neutral(&ratings)))
    }
}

fn average_or_neutral(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        NEUTRAL
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    }
}

/// Read "Your code has been rated at X/10" and normalize to `[0, 1]`
pub fn parse_pylint_score(output: &str) -> Option<f64> {
    output
        .lines()
        .filter_map(|line| line.split_once("rated at").map(|(_, rest)| rest))
        .find_map(|rest| {
            let raw = rest.trim().split('/').next()?;
            raw.trim().parse::<f64>().ok()
        })
        .map(|raw| (raw / 10.0).clamp(0.0, 1.0))
}
