//! FAQ records attached to a service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Category an FAQ is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    /// General questions about the service
    General,
    /// What to do before the appointment
    Preparation,
    /// How the procedure itself works
    Procedure,
    /// Care after the appointment
    Aftercare,
    /// Expected outcomes and how long they last
    Results,
    /// Safety and side effects
    Safety,
    /// Prices, packages and payment
    Pricing,
    /// Booking, rescheduling and cancellation
    Booking,
    /// How the service compares to alternatives
    Comparisons,
    /// Who should not book the service
    Contraindications,
}

impl FaqCategory {
    /// Every category, in declaration order.
    pub const ALL: [FaqCategory; 10] = [
        FaqCategory::General,
        FaqCategory::Preparation,
        FaqCategory::Procedure,
        FaqCategory::Aftercare,
        FaqCategory::Results,
        FaqCategory::Safety,
        FaqCategory::Pricing,
        FaqCategory::Booking,
        FaqCategory::Comparisons,
        FaqCategory::Contraindications,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Preparation => "preparation",
            FaqCategory::Procedure => "procedure",
            FaqCategory::Aftercare => "aftercare",
            FaqCategory::Results => "results",
            FaqCategory::Safety => "safety",
            FaqCategory::Pricing => "pricing",
            FaqCategory::Booking => "booking",
            FaqCategory::Comparisons => "comparisons",
            FaqCategory::Contraindications => "contraindications",
        }
    }
}

impl std::fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question/answer pair with engagement counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Store identifier
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    /// Search keywords
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    /// Number of "this was helpful" votes
    #[serde(default)]
    pub helpful_count: u32,
    /// Number of "this was not helpful" votes
    #[serde(default)]
    pub not_helpful_count: u32,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

pub(crate) fn default_active() -> bool {
    true
}

impl Faq {
    /// Create an active FAQ with no votes.
    pub fn new(
        id: impl Into<String>,
        category: FaqCategory,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category,
            keywords: BTreeSet::new(),
            helpful_count: 0,
            not_helpful_count: 0,
            display_order: 0,
            is_active: true,
        }
    }

    /// Set the helpful vote count.
    pub fn with_helpful_count(mut self, count: u32) -> Self {
        self.helpful_count = count;
        self
    }

    /// Set the display order.
    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = order;
        self
    }

    /// Add a search keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count_and_names() {
        assert_eq!(FaqCategory::ALL.len(), 10);
        assert_eq!(FaqCategory::Comparisons.to_string(), "comparisons");
        assert_eq!(FaqCategory::Contraindications.as_str(), "contraindications");
    }

    #[test]
    fn test_faq_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": "faq-1",
            "question": "Does it hurt?",
            "answer": "Most clients feel mild pressure.",
            "category": "safety",
            "helpfulCount": 4
        }"#;

        let faq: Faq = serde_json::from_str(json).unwrap();
        assert_eq!(faq.category, FaqCategory::Safety);
        assert_eq!(faq.helpful_count, 4);
        assert_eq!(faq.not_helpful_count, 0);
        assert!(faq.keywords.is_empty());
        assert!(faq.is_active);
    }

    #[test]
    fn test_faq_rejects_unknown_category() {
        let json = r#"{"id":"x","question":"q","answer":"a","category":"astrology"}"#;
        assert!(serde_json::from_str::<Faq>(json).is_err());
    }

    #[test]
    fn test_faq_builder() {
        let faq = Faq::new("faq-2", FaqCategory::Pricing, "How much?", "From 200 PLN.")
            .with_helpful_count(3)
            .with_display_order(2)
            .with_keyword("price")
            .with_keyword("price");

        assert_eq!(faq.helpful_count, 3);
        assert_eq!(faq.display_order, 2);
        assert_eq!(faq.keywords.len(), 1);
    }
}
