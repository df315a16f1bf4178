//! Weighted content quality score.
//!
//! Four sub-scores are computed independently, each saturating at its
//! weight, then summed and clamped to 0..=100.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;

use super::metrics::ContentMetrics;

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// The four components of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubScoreKind {
    /// Number of FAQs
    FaqVolume,
    /// Distinct content types covered
    ContentBreadth,
    /// Average section length
    ContentDepth,
    /// Helpful votes on FAQs
    FaqEngagement,
}

impl SubScoreKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SubScoreKind::FaqVolume => "FAQ volume",
            SubScoreKind::ContentBreadth => "Content breadth",
            SubScoreKind::ContentDepth => "Content depth",
            SubScoreKind::FaqEngagement => "FAQ engagement",
        }
    }
}

impl std::fmt::Display for SubScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubScoreKind::FaqVolume => write!(f, "faq_volume"),
            SubScoreKind::ContentBreadth => write!(f, "content_breadth"),
            SubScoreKind::ContentDepth => write!(f, "content_depth"),
            SubScoreKind::FaqEngagement => write!(f, "faq_engagement"),
        }
    }
}

/// Points earned by one component against its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub points: f64,
    pub max: f64,
}

impl SubScore {
    /// Fraction of the maximum earned, 0.0 when the maximum is zero.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.points / self.max).clamp(0.0, 1.0)
    }

    /// Points still available.
    pub fn missing(&self) -> f64 {
        (self.max - self.points).max(0.0)
    }
}

/// Per-component score with the rounded total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub faq_volume: SubScore,
    pub content_breadth: SubScore,
    pub content_depth: SubScore,
    pub faq_engagement: SubScore,
    /// Sum of the components, clamped to 0..=100 and rounded
    pub total: u8,
}

impl ScoreBreakdown {
    /// Score a measured unit against a rubric.
    pub fn compute(metrics: &ContentMetrics, scoring: &ScoringConfig) -> Self {
        let faq_volume = SubScore {
            points: scoring.faq_volume.apply(metrics.faq_count as f64),
            max: scoring.faq_volume.weight,
        };
        let content_breadth = SubScore {
            points: scoring
                .content_breadth
                .apply(metrics.canonical_type_count() as f64),
            max: scoring.content_breadth.weight,
        };
        let content_depth = SubScore {
            points: scoring
                .content_depth
                .apply(metrics.average_content_length()),
            max: scoring.content_depth.weight,
        };
        let faq_engagement = SubScore {
            points: scoring.faq_engagement.apply(metrics.total_helpful as f64),
            max: scoring.faq_engagement.weight,
        };

        let raw = faq_volume.points
            + content_breadth.points
            + content_depth.points
            + faq_engagement.points;
        let total = raw.clamp(0.0, f64::from(MAX_SCORE)).round() as u8;

        Self {
            faq_volume,
            content_breadth,
            content_depth,
            faq_engagement,
            total,
        }
    }

    /// Components in display order.
    pub fn components(&self) -> [(SubScoreKind, SubScore); 4] {
        [
            (SubScoreKind::FaqVolume, self.faq_volume),
            (SubScoreKind::ContentBreadth, self.content_breadth),
            (SubScoreKind::ContentDepth, self.content_depth),
            (SubScoreKind::FaqEngagement, self.faq_engagement),
        ]
    }

    /// Unrounded, unclamped sum of the components.
    pub fn raw_total(&self) -> f64 {
        self.components().iter().map(|(_, s)| s.points).sum()
    }

    /// Component with the most points still available, first wins on ties.
    pub fn weakest(&self) -> SubScoreKind {
        let mut weakest = (SubScoreKind::FaqVolume, self.faq_volume);
        for (kind, sub) in self.components().into_iter().skip(1) {
            if sub.missing() > weakest.1.missing() {
                weakest = (kind, sub);
            }
        }
        weakest.0
    }
}
