//! NDJSON reporter
//!
//! Writes one compact JSON record per scored artifact, each on its own
//! line and flushed immediately so downstream readers see it at once.

use crate::models::{MetricName, OutputRecord, MODEL_CATEGORY};
use crate::scoring::{Aggregation, Aggregator};
use crate::url::{HubIdResolver, IdentityResolver};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Assemble the output record for one artifact.
///
/// `name` falls back to the raw URL when the resolver has no identifier;
/// `latency` is floored at 1.
pub fn build_record(
    url: &str,
    resolver: &dyn IdentityResolver,
    aggregation: &Aggregation,
) -> OutputRecord {
    let name = resolver.resolve(url).unwrap_or_else(|| url.to_string());
    let m = &aggregation.metrics;

    OutputRecord {
        name,
        category: MODEL_CATEGORY.to_string(),
        net_score: aggregation.net_score,
        ramp_up_time: m.value_or_default(MetricName::RampUpTime),
        bus_factor: m.value_or_default(MetricName::BusFactor),
        performance_claims: m.value_or_default(MetricName::PerformanceClaims),
        license: m.value_or_default(MetricName::License),
        size_score: m.value_or_default(MetricName::SizeScore),
        dataset_and_code_score: m.value_or_default(MetricName::DatasetAndCodeScore),
        dataset_quality: m.value_or_default(MetricName::DatasetQuality),
        code_quality: m.value_or_default(MetricName::CodeQuality),
        latency: aggregation.latency_ms.max(1),
    }
}

/// Render a record as a single compact JSON line (no trailing newline)
pub fn render_line(record: &OutputRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Scores artifacts and appends their records to a sink
pub struct NdjsonWriter<W: Write> {
    aggregator: Aggregator,
    resolver: Box<dyn IdentityResolver>,
    out: W,
}

impl NdjsonWriter<std::io::Stdout> {
    /// Writer to standard output with the Hub id resolver
    pub fn stdout(aggregator: Aggregator) -> Self {
        Self::new(aggregator, std::io::stdout())
    }
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(aggregator: Aggregator, out: W) -> Self {
        Self {
            aggregator,
            resolver: Box::new(HubIdResolver),
            out,
        }
    }

    pub fn with_resolver(mut self, resolver: impl IdentityResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Score `url` and write its record.
    ///
    /// Evaluator failures never surface here; only sink I/O errors do.
    pub fn write(&mut self, url: &str) -> Result<OutputRecord> {
        let aggregation = self.aggregator.aggregate(url);
        let record = build_record(url, self.resolver.as_ref(), &aggregation);
        self.write_record(&record)?;
        Ok(record)
    }

    /// Append one record as a JSON line and flush
    pub fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        let mut line = render_line(record)?;
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()?;
        debug!("Wrote record for {}", record.name);
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
