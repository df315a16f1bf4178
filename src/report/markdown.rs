//! Markdown output format for content reports.
//!
//! Produces a summary table across services followed by a score breakdown
//! and grouped suggestions for each service.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::model::{Enhancement, Priority, Suggestion};
use crate::quality::ContentAnalysis;

use super::ContentReport;

/// Errors that can occur during markdown output operations.
#[derive(Error, Debug)]
pub enum MarkdownOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for markdown output operations.
pub type MarkdownOutputResult<T> = Result<T, MarkdownOutputError>;

/// Writer for markdown-formatted content reports.
pub struct MarkdownReportWriter;

impl MarkdownReportWriter {
    /// Write a report to a markdown file.
    pub fn write_to_file<P: AsRef<Path>>(
        report: &ContentReport,
        path: P,
    ) -> MarkdownOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let markdown = Self::to_markdown_string(report);
        writer.write_all(markdown.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Format a report as a markdown string.
    pub fn to_markdown_string(report: &ContentReport) -> String {
        let mut output = String::new();

        output.push_str("# Content Quality Report\n\n");
        output.push_str(&Self::format_summary(report));

        for analysis in &report.analyses {
            output.push_str(&Self::format_analysis(analysis));
        }

        output.push_str(&Self::format_metadata(report));
        output
    }

    /// Format enhancements on their own, as produced by `suggest`.
    pub fn enhancements_to_markdown(enhancements: &[Enhancement]) -> String {
        let mut output = String::from("# Content Enhancements\n\n");

        for enhancement in enhancements {
            output.push_str(&format!("## {}\n\n", enhancement.service_id));
            output.push_str("| Property | Value |\n");
            output.push_str("|----------|-------|\n");
            output.push_str(&format!("| ID | `{}` |\n", enhancement.id));
            output.push_str(&format!("| Type | {} |\n", enhancement.enhancement_type));
            output.push_str(&format!(
                "| Score | {} → {} |\n",
                enhancement.current_score, enhancement.target_score
            ));
            output.push_str(&format!("| Status | {} |\n", enhancement.status));
            output.push_str(&format!(
                "| Created | {} |\n\n",
                enhancement.created_at.to_rfc3339()
            ));

            for (i, improvement) in enhancement.improvements.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, improvement));
            }
            output.push('\n');
        }

        output
    }

    fn format_summary(report: &ContentReport) -> String {
        let mut summary = String::from("## Summary\n\n");

        summary.push_str(&format!(
            "Analyzed **{}** service(s) with an average score of **{:.1}**.\n\n",
            report.metadata.unit_count, report.metadata.average_score
        ));

        if report.analyses.is_empty() {
            return summary;
        }

        summary.push_str("| Service | Score | Target | Suggestions |\n");
        summary.push_str("|---------|-------|--------|-------------|\n");
        for analysis in &report.analyses {
            summary.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                analysis.service_id,
                analysis.breakdown.total,
                analysis.enhancement.target_score,
                analysis.suggestions.len()
            ));
        }
        summary.push('\n');
        summary
    }

    fn format_analysis(analysis: &ContentAnalysis) -> String {
        let mut section = format!(
            "## {} ({}/100)\n\n",
            analysis.service_id, analysis.breakdown.total
        );

        section.push_str("### Score Breakdown\n\n");
        section.push_str("| Component | Points | Max |\n");
        section.push_str("|-----------|--------|-----|\n");
        for (kind, sub) in analysis.breakdown.components() {
            section.push_str(&format!(
                "| {} | {:.1} | {:.0} |\n",
                kind.label(),
                sub.points,
                sub.max
            ));
        }
        section.push('\n');

        section.push_str(&format!(
            "Target score: **{}**. Estimated impact of all suggestions: **{}** points.\n\n",
            analysis.enhancement.target_score, analysis.projected_impact
        ));

        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let group: Vec<&Suggestion> = analysis
                .suggestions
                .iter()
                .filter(|s| s.priority == priority)
                .collect();
            if group.is_empty() {
                continue;
            }

            section.push_str(&format!(
                "### {} {} Priority\n\n",
                Self::priority_badge(priority),
                Self::priority_label(priority)
            ));
            for suggestion in group {
                section.push_str(&format!(
                    "- **{}** (+{})  \n  {}\n",
                    suggestion.description, suggestion.estimated_impact, suggestion.action
                ));
            }
            section.push('\n');
        }

        section.push_str("---\n\n");
        section
    }

    fn format_metadata(report: &ContentReport) -> String {
        let mut section = String::from("## Report Metadata\n\n");

        section.push_str("| Property | Value |\n");
        section.push_str("|----------|-------|\n");
        section.push_str(&format!(
            "| Tool Version | {} |\n",
            report.metadata.tool_version
        ));
        section.push_str(&format!("| Timestamp | {} |\n", report.metadata.timestamp));
        section.push_str(&format!(
            "| Duration | {} ms |\n",
            report.metadata.duration_ms
        ));
        section
    }

    fn priority_badge(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }

    fn priority_label(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}
