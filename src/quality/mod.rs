//! Content quality scoring and gap analysis.
//!
//! This module contains the scoring rubric, the suggestion rule table and
//! the engine that ties them together.

pub mod engine;
pub mod metrics;
pub mod rules;
pub mod score;

pub use engine::{compute_score, generate_suggestions, ContentAnalysis, ContentQualityEngine};
pub use metrics::ContentMetrics;
pub use rules::{RuleCondition, RuleSet, SuggestionRule};
pub use score::{ScoreBreakdown, SubScore, SubScoreKind, MAX_SCORE};
