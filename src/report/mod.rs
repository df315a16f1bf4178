//! Content quality reports.
//!
//! A [`ContentReport`] wraps the analyses of a batch of services with run
//! metadata. Writers in this module render it for machines (JSON) and for
//! people (Markdown).

pub mod markdown;
pub mod structured;

pub use markdown::{MarkdownOutputError, MarkdownReportWriter};
pub use structured::{JsonOutputError, JsonReportWriter};

use serde::{Deserialize, Serialize};

use crate::quality::ContentAnalysis;

/// Metadata about the analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Version of this tool
    pub tool_version: String,
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    /// Number of services analyzed
    pub unit_count: usize,
    /// Mean score across services, 0.0 for an empty report
    pub average_score: f64,
    /// Duration of the run in milliseconds
    pub duration_ms: u64,
}

/// Analyses for a batch of services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    pub metadata: ReportMetadata,
    pub analyses: Vec<ContentAnalysis>,
}

impl ContentReport {
    /// Create a report for a set of analyses.
    pub fn new(analyses: Vec<ContentAnalysis>) -> Self {
        let unit_count = analyses.len();
        let average_score = if unit_count == 0 {
            0.0
        } else {
            analyses
                .iter()
                .map(|a| f64::from(a.breakdown.total))
                .sum::<f64>()
                / unit_count as f64
        };

        Self {
            metadata: ReportMetadata {
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                unit_count,
                average_score,
                duration_ms: 0,
            },
            analyses,
        }
    }

    /// Record how long the run took.
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = duration_ms;
        self
    }

    /// Analyses scoring below `threshold`.
    pub fn below(&self, threshold: u8) -> Vec<&ContentAnalysis> {
        self.analyses
            .iter()
            .filter(|a| a.breakdown.total < threshold)
            .collect()
    }

    /// Lowest-scoring analysis, first wins on ties.
    pub fn weakest(&self) -> Option<&ContentAnalysis> {
        self.analyses
            .iter()
            .reduce(|worst, a| {
                if a.breakdown.total < worst.breakdown.total {
                    a
                } else {
                    worst
                }
            })
    }
}
