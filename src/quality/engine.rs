//! Content quality engine.
//!
//! Stateless apart from its immutable rubric, so one engine can be shared
//! across threads and called concurrently.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::model::{ContentUnit, Enhancement, EnhancementStatus, EnhancementType, Suggestion};

use super::metrics::ContentMetrics;
use super::rules::RuleSet;
use super::score::{ScoreBreakdown, MAX_SCORE};

/// Everything the engine knows about one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub service_id: String,
    pub breakdown: ScoreBreakdown,
    /// Suggestions in emission order
    pub suggestions: Vec<Suggestion>,
    pub enhancement: Enhancement,
    /// Sum of estimated impacts across all suggestions.
    ///
    /// Not used for the enhancement's target score, which stays at the
    /// configured fixed delta.
    pub projected_impact: u32,
}

impl ContentAnalysis {
    /// Suggestions ordered by priority then estimated impact, highest first.
    /// Ties keep emission order.
    pub fn ranked_suggestions(&self) -> Vec<&Suggestion> {
        let mut ranked: Vec<&Suggestion> = self.suggestions.iter().collect();
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.estimated_impact.cmp(&a.estimated_impact))
        });
        ranked
    }

    /// Score the unit would reach if every suggestion delivered its estimate.
    pub fn projected_score(&self) -> u8 {
        let projected = u32::from(self.breakdown.total) + self.projected_impact;
        projected.min(u32::from(MAX_SCORE)) as u8
    }
}

/// Scores content units and generates improvement suggestions.
#[derive(Debug, Clone)]
pub struct ContentQualityEngine {
    config: EngineConfig,
    rules: RuleSet,
}

impl Default for ContentQualityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ContentQualityEngine {
    /// Create an engine with the given rubric.
    pub fn new(config: EngineConfig) -> Self {
        let rules = RuleSet::from_config(&config.suggestions);
        Self { config, rules }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Quality score in 0..=100.
    pub fn compute_score(&self, unit: &ContentUnit) -> u8 {
        self.score_breakdown(unit).total
    }

    /// Score with every sub-score exposed.
    pub fn score_breakdown(&self, unit: &ContentUnit) -> ScoreBreakdown {
        let metrics = ContentMetrics::measure(unit);
        ScoreBreakdown::compute(&metrics, &self.config.scoring)
    }

    /// Suggestions in emission order.
    pub fn suggestions(&self, unit: &ContentUnit) -> Vec<Suggestion> {
        self.rules.evaluate(&ContentMetrics::measure(unit))
    }

    /// Build a pending, unpersisted enhancement for the unit.
    pub fn generate_suggestions(&self, unit: &ContentUnit) -> Enhancement {
        self.analyze(unit).enhancement
    }

    /// Score, suggestions and enhancement in one pass.
    pub fn analyze(&self, unit: &ContentUnit) -> ContentAnalysis {
        let metrics = ContentMetrics::measure(unit);
        let breakdown = ScoreBreakdown::compute(&metrics, &self.config.scoring);
        let suggestions = self.rules.evaluate(&metrics);
        let enhancement = self.build_enhancement(unit, breakdown.total, &suggestions);
        let projected_impact = suggestions.iter().map(|s| s.estimated_impact).sum();

        tracing::debug!(
            service_id = %unit.service_id,
            score = breakdown.total,
            suggestions = suggestions.len(),
            "analyzed content unit"
        );

        ContentAnalysis {
            service_id: unit.service_id.clone(),
            breakdown,
            suggestions,
            enhancement,
            projected_impact,
        }
    }

    /// Analyze a batch, preserving input order.
    pub fn analyze_all(&self, units: &[ContentUnit]) -> Vec<ContentAnalysis> {
        units.iter().map(|unit| self.analyze(unit)).collect()
    }

    fn build_enhancement(
        &self,
        unit: &ContentUnit,
        current_score: u8,
        suggestions: &[Suggestion],
    ) -> Enhancement {
        let target_score = current_score
            .saturating_add(self.config.suggestions.target_score_delta)
            .min(MAX_SCORE);

        // Trust signals always fire, so this fallback is not reached with a RuleSet table
        let enhancement_type = suggestions
            .first()
            .map(|s| s.suggestion_type)
            .unwrap_or(EnhancementType::EducationalValue);

        Enhancement {
            id: Uuid::new_v4(),
            service_id: unit.service_id.clone(),
            enhancement_type,
            current_score,
            target_score,
            improvements: suggestions.iter().map(|s| s.description.clone()).collect(),
            auto_generated: true,
            status: EnhancementStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Score a unit with the default rubric.
pub fn compute_score(unit: &ContentUnit) -> u8 {
    ContentQualityEngine::default().compute_score(unit)
}

/// Generate an enhancement for a unit with the default rubric.
pub fn generate_suggestions(unit: &ContentUnit) -> Enhancement {
    ContentQualityEngine::default().generate_suggestions(unit)
}
