//! Gap-analysis rule table.
//!
//! Each rule pairs a condition over [`ContentMetrics`] with the suggestion it
//! emits. Rules are evaluated in table order and that order is the order of
//! the resulting suggestions.

use crate::config::SuggestionConfig;
use crate::model::{ContentType, EnhancementType, FaqCategory, Priority, Suggestion};

use super::metrics::ContentMetrics;

/// Condition under which a rule fires.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCondition {
    /// No section of this type exists
    MissingContentType(ContentType),
    /// No FAQ in this category exists
    MissingFaqCategory(FaqCategory),
    /// Fewer FAQs than the target
    FaqCountBelow(usize),
    /// Average section length under the threshold
    AverageContentLengthBelow(f64),
    /// Fires for every unit
    Always,
}

impl RuleCondition {
    /// Whether the condition holds for the measured unit.
    pub fn matches(&self, metrics: &ContentMetrics) -> bool {
        match self {
            RuleCondition::MissingContentType(content_type) => {
                !metrics.has_content_type(*content_type)
            }
            RuleCondition::MissingFaqCategory(category) => !metrics.has_faq_category(*category),
            RuleCondition::FaqCountBelow(target) => metrics.faq_count < *target,
            RuleCondition::AverageContentLengthBelow(threshold) => {
                metrics.average_content_length() < *threshold
            }
            RuleCondition::Always => true,
        }
    }
}

/// A named rule and the suggestion it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRule {
    /// Stable rule name, carried on every suggestion it emits
    pub name: String,
    pub condition: RuleCondition,
    pub suggestion_type: EnhancementType,
    pub priority: Priority,
    pub description: String,
    pub action: String,
    pub estimated_impact: u32,
}

impl SuggestionRule {
    /// Evaluate the rule, returning its suggestion when the condition holds.
    pub fn evaluate(&self, metrics: &ContentMetrics) -> Option<Suggestion> {
        if !self.condition.matches(metrics) {
            return None;
        }
        tracing::trace!(rule = %self.name, "rule matched");
        Some(Suggestion {
            rule: self.name.clone(),
            suggestion_type: self.suggestion_type,
            priority: self.priority,
            description: self.description.clone(),
            action: self.action.clone(),
            estimated_impact: self.estimated_impact,
        })
    }

    fn missing_content_type(content_type: ContentType) -> Self {
        Self {
            name: format!("missing_content_{}", content_type),
            condition: RuleCondition::MissingContentType(content_type),
            suggestion_type: EnhancementType::ContentDeepening,
            priority: Priority::High,
            description: format!("Add {} content to educate clients better", content_type),
            action: format!("Create {} guide using template", content_type),
            estimated_impact: 15,
        }
    }

    fn missing_faq_category(category: FaqCategory) -> Self {
        Self {
            name: format!("missing_faq_{}", category),
            condition: RuleCondition::MissingFaqCategory(category),
            suggestion_type: EnhancementType::FaqExpansion,
            priority: Priority::Medium,
            description: format!("Add {} FAQs to address client concerns", category),
            action: format!("Generate {} focused FAQs", category),
            estimated_impact: 10,
        }
    }

    fn faq_volume(target: usize) -> Self {
        Self {
            name: "faq_volume".to_string(),
            condition: RuleCondition::FaqCountBelow(target),
            suggestion_type: EnhancementType::FaqExpansion,
            priority: Priority::High,
            description: "Expand FAQ section to cover more client questions".to_string(),
            action: "Generate additional FAQs based on common client inquiries".to_string(),
            estimated_impact: 12,
        }
    }

    fn content_depth(threshold: f64) -> Self {
        Self {
            name: "content_depth".to_string(),
            condition: RuleCondition::AverageContentLengthBelow(threshold),
            suggestion_type: EnhancementType::ContentDeepening,
            priority: Priority::Medium,
            description: "Enhance existing content with more detailed information".to_string(),
            action: "Expand current content sections with expert insights".to_string(),
            estimated_impact: 8,
        }
    }

    fn trust_signals() -> Self {
        Self {
            name: "trust_signals".to_string(),
            condition: RuleCondition::Always,
            suggestion_type: EnhancementType::TrustBuilding,
            priority: Priority::Medium,
            description: "Add trust signals and social proof elements".to_string(),
            action: "Include client testimonials, expert credentials, and success metrics"
                .to_string(),
            estimated_impact: 10,
        }
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<SuggestionRule>,
}

impl RuleSet {
    /// Build the table: missing content types, missing FAQ categories, FAQ
    /// volume, content depth, then trust signals.
    pub fn from_config(config: &SuggestionConfig) -> Self {
        let mut rules = Vec::with_capacity(
            config.required_content_types.len() + config.required_faq_categories.len() + 3,
        );

        rules.extend(
            config
                .required_content_types
                .iter()
                .map(|t| SuggestionRule::missing_content_type(*t)),
        );
        rules.extend(
            config
                .required_faq_categories
                .iter()
                .map(|c| SuggestionRule::missing_faq_category(*c)),
        );
        rules.push(SuggestionRule::faq_volume(config.faq_count_target));
        rules.push(SuggestionRule::content_depth(
            config.min_average_content_length,
        ));
        rules.push(SuggestionRule::trust_signals());

        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    /// Evaluate every rule in order.
    pub fn evaluate(&self, metrics: &ContentMetrics) -> Vec<Suggestion> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(metrics))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&SuggestionConfig::default())
    }
}
