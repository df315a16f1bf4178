//! Data model for service content.
//!
//! A [`ContentUnit`] is the read-only snapshot the engine scores: the FAQs and
//! guidance sections the store holds for one service. [`Enhancement`] is what
//! the engine hands back.

pub mod enhancement;
pub mod faq;
pub mod section;

pub use enhancement::{
    Enhancement, EnhancementStatus, EnhancementType, Priority, Suggestion, TransitionError,
};
pub use faq::{Faq, FaqCategory};
pub use section::{ContentSection, ContentType};

use serde::{Deserialize, Serialize};

/// FAQ and content-section snapshot for one service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUnit {
    /// Identifier of the service in the external store
    pub service_id: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub content_sections: Vec<ContentSection>,
}

impl ContentUnit {
    /// Create an empty unit for a service.
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            faqs: Vec::new(),
            content_sections: Vec::new(),
        }
    }

    /// Append an FAQ.
    pub fn with_faq(mut self, faq: Faq) -> Self {
        self.faqs.push(faq);
        self
    }

    /// Append a content section.
    pub fn with_section(mut self, section: ContentSection) -> Self {
        self.content_sections.push(section);
        self
    }

    /// Whether the unit has neither FAQs nor sections.
    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty() && self.content_sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_deserialize_without_collections() {
        let unit: ContentUnit = serde_json::from_str(r#"{"serviceId":"svc-1"}"#).unwrap();
        assert_eq!(unit.service_id, "svc-1");
        assert!(unit.is_empty());
    }

    #[test]
    fn test_unit_builder() {
        let unit = ContentUnit::new("svc-2")
            .with_faq(Faq::new("f1", FaqCategory::General, "q", "a"))
            .with_section(ContentSection::new(
                "s1",
                ContentType::Benefits,
                "Benefits",
                "Smoother skin.",
            ));

        assert_eq!(unit.faqs.len(), 1);
        assert_eq!(unit.content_sections.len(), 1);
        assert!(!unit.is_empty());
    }

    #[test]
    fn test_unit_round_trips_wire_names() {
        let unit = ContentUnit::new("svc-3").with_section(ContentSection::new(
            "s1",
            ContentType::Risks,
            "Risks",
            "Temporary redness.",
        ));
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["contentSections"][0]["contentType"], "risks");
        assert_eq!(json["contentSections"][0]["isActive"], true);
    }
}
