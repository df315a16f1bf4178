//! Integration tests for scoring and gap analysis through the public API.

use content_quality::config::EngineConfig;
use content_quality::model::{
    ContentSection, ContentType, ContentUnit, EnhancementStatus, EnhancementType, Faq, FaqCategory,
    Priority,
};
use content_quality::quality::{compute_score, generate_suggestions, ContentQualityEngine};

fn section(id: &str, content_type: ContentType, len: usize) -> ContentSection {
    ContentSection::new(id, content_type, format!("{} guide", content_type), "x".repeat(len))
}

fn faqs(count: usize) -> Vec<Faq> {
    (0..count)
        .map(|i| Faq::new(format!("faq-{}", i), FaqCategory::General, "q", "a"))
        .collect()
}

/// 3 FAQs (general, general, preparation; 2+3+5 helpful votes) and two
/// sections (preparation 600 chars, benefits 800 chars).
fn lip_filler() -> ContentUnit {
    ContentUnit::new("svc-lip-filler")
        .with_faq(Faq::new("f1", FaqCategory::General, "q1", "a1").with_helpful_count(2))
        .with_faq(Faq::new("f2", FaqCategory::General, "q2", "a2").with_helpful_count(3))
        .with_faq(Faq::new("f3", FaqCategory::Preparation, "q3", "a3").with_helpful_count(5))
        .with_section(section("s1", ContentType::Preparation, 600))
        .with_section(section("s2", ContentType::Benefits, 800))
}

/// Five FAQs and one long section of every canonical type.
fn complete_unit() -> ContentUnit {
    let mut unit = ContentUnit::new("svc-complete");
    unit.faqs = faqs(5);
    unit.faqs[0].helpful_count = 10;
    for (i, content_type) in ContentType::CANONICAL.iter().enumerate() {
        unit.content_sections
            .push(section(&format!("s{}", i), *content_type, 1000));
    }
    unit
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_empty_unit_scores_zero() {
    assert_eq!(compute_score(&ContentUnit::new("svc-empty")), 0);
}

#[test]
fn test_lip_filler_scores_sixty() {
    let engine = ContentQualityEngine::default();
    let breakdown = engine.score_breakdown(&lip_filler());

    assert_eq!(breakdown.faq_volume.points, 24.0);
    assert_eq!(breakdown.content_breadth.points, 12.0);
    assert_eq!(breakdown.content_depth.points, 14.0);
    assert_eq!(breakdown.faq_engagement.points, 10.0);
    assert_eq!(breakdown.total, 60);
}

#[test]
fn test_faq_volume_saturates_at_five() {
    let engine = ContentQualityEngine::default();
    let mut previous = 0;

    for count in 0..=8 {
        let mut unit = ContentUnit::new("svc-volume");
        unit.faqs = faqs(count);
        let score = engine.compute_score(&unit);

        assert!(score >= previous, "score dropped at {} FAQs", count);
        if count > 5 {
            assert_eq!(score, previous, "FAQ {} changed the score", count);
        }
        previous = score;
    }
    assert_eq!(previous, 40);
}

#[test]
fn test_complete_unit_scores_hundred() {
    assert_eq!(compute_score(&complete_unit()), 100);
}

#[test]
fn test_score_never_exceeds_hundred() {
    let mut unit = complete_unit();
    unit.faqs = faqs(50);
    unit.faqs[0].helpful_count = u32::MAX;
    unit.content_sections
        .push(section("huge", ContentType::Risks, 100_000));

    assert_eq!(compute_score(&unit), 100);
}

#[test]
fn test_faq_sections_do_not_count_towards_breadth() {
    let unit = ContentUnit::new("svc-faq-only")
        .with_section(section("s1", ContentType::Faq, 0))
        .with_section(section("s2", ContentType::Aftercare, 0));

    let breakdown = ContentQualityEngine::default().score_breakdown(&unit);
    assert_eq!(breakdown.content_breadth.points, 6.0);
}

#[test]
fn test_content_length_counts_characters() {
    // 50 two-byte characters are 50 characters of content
    let unit = ContentUnit::new("svc-unicode").with_section(ContentSection::new(
        "s1",
        ContentType::Risks,
        "Risks",
        "é".repeat(50),
    ));

    let breakdown = ContentQualityEngine::default().score_breakdown(&unit);
    assert_eq!(breakdown.content_depth.points, 1.0);
}

// ============================================================================
// Suggestions
// ============================================================================

#[test]
fn test_empty_unit_suggestion_sequence() {
    let analysis = ContentQualityEngine::default().analyze(&ContentUnit::new("svc-empty"));
    let rules: Vec<&str> = analysis.suggestions.iter().map(|s| s.rule.as_str()).collect();

    assert_eq!(
        rules,
        vec![
            "missing_content_preparation",
            "missing_content_aftercare",
            "missing_content_expectations",
            "missing_content_benefits",
            "missing_content_risks",
            "missing_faq_safety",
            "missing_faq_pricing",
            "missing_faq_results",
            "missing_faq_comparisons",
            "faq_volume",
            "content_depth",
            "trust_signals",
        ]
    );

    let types: Vec<EnhancementType> = analysis
        .suggestions
        .iter()
        .map(|s| s.suggestion_type)
        .collect();
    assert_eq!(
        types.iter().filter(|t| **t == EnhancementType::ContentDeepening).count(),
        6
    );
    assert_eq!(
        types.iter().filter(|t| **t == EnhancementType::FaqExpansion).count(),
        5
    );
    assert_eq!(types.last(), Some(&EnhancementType::TrustBuilding));
}

#[test]
fn test_lip_filler_suggestions() {
    let analysis = ContentQualityEngine::default().analyze(&lip_filler());
    let descriptions: Vec<&str> = analysis
        .suggestions
        .iter()
        .map(|s| s.description.as_str())
        .collect();

    assert_eq!(
        descriptions,
        vec![
            "Add aftercare content to educate clients better",
            "Add expectations content to educate clients better",
            "Add risks content to educate clients better",
            "Add safety FAQs to address client concerns",
            "Add pricing FAQs to address client concerns",
            "Add results FAQs to address client concerns",
            "Add comparisons FAQs to address client concerns",
            "Expand FAQ section to cover more client questions",
            "Add trust signals and social proof elements",
        ]
    );
}

#[test]
fn test_trust_signals_fire_for_complete_unit() {
    let mut unit = complete_unit();
    unit.faqs = [
        FaqCategory::Safety,
        FaqCategory::Pricing,
        FaqCategory::Results,
        FaqCategory::Comparisons,
    ]
    .iter()
    .chain(std::iter::repeat(&FaqCategory::General).take(4))
    .enumerate()
    .map(|(i, c)| Faq::new(format!("faq-{}", i), *c, "q", "a"))
    .collect();

    let analysis = ContentQualityEngine::default().analyze(&unit);
    assert_eq!(analysis.suggestions.len(), 1);
    assert_eq!(analysis.suggestions[0].rule, "trust_signals");
    assert_eq!(analysis.suggestions[0].priority, Priority::Medium);
    assert_eq!(analysis.enhancement.enhancement_type, EnhancementType::TrustBuilding);
}

// ============================================================================
// Enhancement records
// ============================================================================

#[test]
fn test_enhancement_scores_follow_computed_score() {
    let engine = ContentQualityEngine::default();

    for unit in [ContentUnit::new("svc-empty"), lip_filler(), complete_unit()] {
        let score = engine.compute_score(&unit);
        let enhancement = engine.generate_suggestions(&unit);

        assert_eq!(enhancement.current_score, score);
        assert_eq!(enhancement.target_score, score.saturating_add(25).min(100));
        assert_eq!(enhancement.service_id, unit.service_id);
        assert_eq!(enhancement.status, EnhancementStatus::Pending);
        assert!(enhancement.auto_generated);
    }
}

#[test]
fn test_target_score_ignores_estimated_impacts() {
    let analysis = ContentQualityEngine::default().analyze(&lip_filler());

    // 3*15 + 4*10 + 12 + 10
    assert_eq!(analysis.projected_impact, 107);
    assert_eq!(analysis.projected_score(), 100);
    assert_eq!(analysis.enhancement.target_score, 85);
}

#[test]
fn test_repeated_calls_differ_only_in_identity() {
    let engine = ContentQualityEngine::default();
    let unit = lip_filler();

    assert_eq!(engine.compute_score(&unit), engine.compute_score(&unit));

    let first = engine.generate_suggestions(&unit);
    let second = engine.generate_suggestions(&unit);
    assert_ne!(first.id, second.id);
    assert_eq!(first.enhancement_type, second.enhancement_type);
    assert_eq!(first.current_score, second.current_score);
    assert_eq!(first.target_score, second.target_score);
    assert_eq!(first.improvements, second.improvements);
}

#[test]
fn test_enhancement_lifecycle() {
    let mut enhancement = generate_suggestions(&lip_filler());

    assert!(enhancement.transition(EnhancementStatus::Completed).is_err());
    assert_eq!(enhancement.status, EnhancementStatus::Pending);

    enhancement.transition(EnhancementStatus::InProgress).unwrap();
    enhancement.transition(EnhancementStatus::Completed).unwrap();
    enhancement.transition(EnhancementStatus::Applied).unwrap();
    assert!(enhancement.transition(EnhancementStatus::Pending).is_err());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_rubric_changes_thresholds() {
    let config = EngineConfig::from_toml_str(
        r#"
        [scoring.faq_volume]
        weight = 40.0
        points = 4.0
        per = 1.0

        [suggestions]
        faq_count_target = 3
        target_score_delta = 5
        "#,
    )
    .unwrap();
    let engine = ContentQualityEngine::new(config);
    let analysis = engine.analyze(&lip_filler());

    // 12 + 12 + 14 + 10
    assert_eq!(analysis.breakdown.total, 48);
    assert_eq!(analysis.enhancement.target_score, 53);
    assert!(analysis.suggestions.iter().all(|s| s.rule != "faq_volume"));
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = std::sync::Arc::new(ContentQualityEngine::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.compute_score(&lip_filler()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 60);
    }
}
