//! Enhancement records and the suggestions they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Kind of improvement an enhancement or suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementType {
    /// More or broader FAQs
    FaqExpansion,
    /// Missing or thin guidance sections
    ContentDeepening,
    /// Testimonials, credentials, social proof
    TrustBuilding,
    /// Educational material about the service
    EducationalValue,
}

impl std::fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnhancementType::FaqExpansion => write!(f, "faq_expansion"),
            EnhancementType::ContentDeepening => write!(f, "content_deepening"),
            EnhancementType::TrustBuilding => write!(f, "trust_building"),
            EnhancementType::EducationalValue => write!(f, "educational_value"),
        }
    }
}

/// Priority of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A single improvement produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Name of the rule that produced this suggestion
    pub rule: String,
    #[serde(rename = "type")]
    pub suggestion_type: EnhancementType,
    pub priority: Priority,
    /// Short description shown to the editor
    pub description: String,
    /// What to do about it
    pub action: String,
    /// Estimated score gain if acted on
    pub estimated_impact: u32,
}

/// Review status of an enhancement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Applied,
}

impl EnhancementStatus {
    /// Whether a record in this status may move to `next`.
    pub fn can_transition_to(&self, next: EnhancementStatus) -> bool {
        use EnhancementStatus::*;
        matches!(
            (*self, next),
            (Pending, InProgress)
                | (Pending, Applied)
                | (InProgress, Completed)
                | (InProgress, Applied)
                | (Completed, Applied)
        )
    }
}

impl std::fmt::Display for EnhancementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnhancementStatus::Pending => write!(f, "pending"),
            EnhancementStatus::InProgress => write!(f, "in_progress"),
            EnhancementStatus::Completed => write!(f, "completed"),
            EnhancementStatus::Applied => write!(f, "applied"),
        }
    }
}

/// Rejected status change.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot move enhancement {id} from {from} to {to}")]
pub struct TransitionError {
    pub id: Uuid,
    pub from: EnhancementStatus,
    pub to: EnhancementStatus,
}

/// A generated bundle of suggestions plus a before/after score pair.
///
/// Created unpersisted; storing and applying it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub id: Uuid,
    pub service_id: String,
    pub enhancement_type: EnhancementType,
    /// Score at generation time, 0..=100
    pub current_score: u8,
    /// Aspirational score, never below `current_score`, at most 100
    pub target_score: u8,
    /// Suggestion descriptions in emission order
    pub improvements: Vec<String>,
    pub auto_generated: bool,
    pub status: EnhancementStatus,
    pub created_at: DateTime<Utc>,
}

impl Enhancement {
    /// Move to `next`, leaving the record untouched if the change is not allowed.
    pub fn transition(&mut self, next: EnhancementStatus) -> Result<(), TransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(TransitionError {
                id: self.id,
                from: self.status,
                to: next,
            });
        }
        tracing::debug!(id = %self.id, from = %self.status, to = %next, "enhancement status changed");
        self.status = next;
        Ok(())
    }

    /// Points between the current and target score.
    pub fn score_gap(&self) -> u8 {
        self.target_score.saturating_sub(self.current_score)
    }
}
