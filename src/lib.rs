//! Content quality scoring and gap analysis for service content.
//!
//! Scores the FAQs and guidance sections of a bookable service on a 0-100
//! scale and produces a prioritized list of improvements, packaged as an
//! [`model::Enhancement`] the caller can store and apply.
//!
//! ```
//! use content_quality::model::{ContentSection, ContentType, ContentUnit, Faq, FaqCategory};
//! use content_quality::quality::{compute_score, generate_suggestions};
//!
//! let unit = ContentUnit::new("svc-hydrafacial")
//!     .with_faq(Faq::new("f1", FaqCategory::Safety, "Is it safe?", "Yes.").with_helpful_count(4))
//!     .with_section(ContentSection::new("s1", ContentType::Aftercare, "Aftercare", "Avoid sun."));
//!
//! let score = compute_score(&unit);
//! let enhancement = generate_suggestions(&unit);
//! assert_eq!(enhancement.current_score, score);
//! assert!(enhancement.target_score >= score);
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod quality;
pub mod report;
pub mod ui;
