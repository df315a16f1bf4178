//! Raw measurements taken from a content snapshot.
//!
//! Scoring and gap rules both work from these numbers, so a unit is walked
//! once per analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{ContentType, ContentUnit, FaqCategory};

/// Measurements of one [`ContentUnit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    /// Number of FAQs
    pub faq_count: usize,
    /// Number of content sections
    pub section_count: usize,
    /// Content types present among the sections
    pub content_types: BTreeSet<ContentType>,
    /// FAQ categories present
    pub faq_categories: BTreeSet<FaqCategory>,
    /// Sum of all section lengths in characters
    pub total_content_length: usize,
    /// Sum of helpful votes across FAQs
    pub total_helpful: u64,
}

impl ContentMetrics {
    /// Measure a content unit.
    pub fn measure(unit: &ContentUnit) -> Self {
        let mut metrics = ContentMetrics {
            faq_count: unit.faqs.len(),
            section_count: unit.content_sections.len(),
            ..Default::default()
        };

        for faq in &unit.faqs {
            metrics.faq_categories.insert(faq.category);
            metrics.total_helpful += u64::from(faq.helpful_count);
        }

        for section in &unit.content_sections {
            metrics.content_types.insert(section.content_type);
            metrics.total_content_length += section.content_length();
        }

        metrics
    }

    /// Distinct content types that count towards breadth.
    pub fn canonical_type_count(&self) -> usize {
        self.content_types
            .iter()
            .filter(|t| t.is_canonical())
            .count()
    }

    /// Average section length; zero when there are no sections.
    pub fn average_content_length(&self) -> f64 {
        self.total_content_length as f64 / self.section_count.max(1) as f64
    }

    pub fn has_content_type(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }

    pub fn has_faq_category(&self, category: FaqCategory) -> bool {
        self.faq_categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentSection, Faq};

    #[test]
    fn test_measure_empty_unit() {
        let metrics = ContentMetrics::measure(&ContentUnit::new("svc"));
        assert_eq!(metrics, ContentMetrics::default());
        assert_eq!(metrics.average_content_length(), 0.0);
        assert_eq!(metrics.canonical_type_count(), 0);
    }

    #[test]
    fn test_measure_counts_distinct_values() {
        let unit = ContentUnit::new("svc")
            .with_faq(Faq::new("f1", FaqCategory::General, "q", "a").with_helpful_count(2))
            .with_faq(Faq::new("f2", FaqCategory::General, "q", "a").with_helpful_count(3))
            .with_faq(Faq::new("f3", FaqCategory::Safety, "q", "a"))
            .with_section(ContentSection::new("s1", ContentType::Benefits, "t", "a".repeat(100)))
            .with_section(ContentSection::new("s2", ContentType::Benefits, "t", "b".repeat(300)))
            .with_section(ContentSection::new("s3", ContentType::Faq, "t", "c".repeat(200)));

        let metrics = ContentMetrics::measure(&unit);
        assert_eq!(metrics.faq_count, 3);
        assert_eq!(metrics.faq_categories.len(), 2);
        assert_eq!(metrics.total_helpful, 5);
        assert_eq!(metrics.section_count, 3);
        assert_eq!(metrics.content_types.len(), 2);
        assert_eq!(metrics.canonical_type_count(), 1);
        assert_eq!(metrics.average_content_length(), 200.0);
        assert!(metrics.has_content_type(ContentType::Faq));
        assert!(!metrics.has_faq_category(FaqCategory::Pricing));
    }
}
