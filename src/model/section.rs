//! Titled guidance sections attached to a service.

use serde::{Deserialize, Serialize};

use super::faq::default_active;

/// Kind of guidance a content section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Preparation,
    Aftercare,
    Expectations,
    Benefits,
    Risks,
    /// FAQ-style section; not counted towards content breadth
    Faq,
}

impl ContentType {
    /// Section-depth types, in the order gaps are reported.
    pub const CANONICAL: [ContentType; 5] = [
        ContentType::Preparation,
        ContentType::Aftercare,
        ContentType::Expectations,
        ContentType::Benefits,
        ContentType::Risks,
    ];

    /// Wire name of the content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Preparation => "preparation",
            ContentType::Aftercare => "aftercare",
            ContentType::Expectations => "expectations",
            ContentType::Benefits => "benefits",
            ContentType::Risks => "risks",
            ContentType::Faq => "faq",
        }
    }

    /// Whether this type counts towards content breadth.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, ContentType::Faq)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block of free-text guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: String,
    pub content_type: ContentType,
    pub title: String,
    /// Free text body
    pub content: String,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ContentSection {
    /// Create an active section.
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            title: title.into(),
            content: content.into(),
            display_order: 0,
            is_active: true,
        }
    }

    /// Length of the body in characters (not bytes).
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_excludes_faq() {
        assert_eq!(ContentType::CANONICAL.len(), 5);
        assert!(!ContentType::CANONICAL.contains(&ContentType::Faq));
        assert!(!ContentType::Faq.is_canonical());
        assert!(ContentType::Risks.is_canonical());
    }

    #[test]
    fn test_content_length_counts_chars() {
        let section = ContentSection::new("s1", ContentType::Aftercare, "Aftercare", "żółć");
        assert_eq!(section.content_length(), 4);
        assert_eq!(section.content.len(), 8);
    }

    #[test]
    fn test_section_deserialize() {
        let json = r#"{
            "id": "sec-1",
            "contentType": "expectations",
            "title": "What to expect",
            "content": "A 60 minute session.",
            "displayOrder": 3,
            "isActive": false
        }"#;

        let section: ContentSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.content_type, ContentType::Expectations);
        assert_eq!(section.display_order, 3);
        assert!(!section.is_active);
    }
}
