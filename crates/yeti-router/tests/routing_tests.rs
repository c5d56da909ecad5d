// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end routing scenarios through the public API.

use proptest::prelude::*;
use yeti_config::model::RoutingConfig;
use yeti_core::{ComplexityLevel, ModelCategory, PatternKind};
use yeti_router::{ModelRouter, RouteOptions, analyze_input, route_message};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn translate_request_routes_to_concept_model() {
    let decision = route_message(
        "Translate this document into French",
        None,
        RouteOptions::default(),
    );
    assert_eq!(decision.selected, ModelCategory::Concept);
    assert!(approx(decision.confidence, 0.7));
    assert_eq!(decision.patterns, vec![PatternKind::Translate]);
    assert_eq!(decision.fallbacks, vec![ModelCategory::LargeLanguage]);
    assert_eq!(decision.rationale, "Detected patterns: translate");
    assert_eq!(decision.complexity, Some(ComplexityLevel::Low));
}

#[test]
fn fast_image_request_switches_to_small_model() {
    let options = RouteOptions {
        requires_fast_response: Some(true),
        ..Default::default()
    };
    let decision = route_message("generate an image of a mountain", None, options);
    assert_eq!(decision.selected, ModelCategory::SmallLanguage);
    assert!(approx(decision.confidence, 0.6));
    assert_eq!(
        decision.fallbacks,
        vec![ModelCategory::VisionLanguage, ModelCategory::Segmentation]
    );
    assert!(
        decision
            .rationale
            .ends_with("; switched to Small Language Model for fast response"),
        "rationale: {}",
        decision.rationale
    );
}

#[test]
fn user_preference_beats_skill() {
    let options = RouteOptions {
        user_preference: Some(ModelCategory::Action),
        ..Default::default()
    };
    let decision = route_message("draft a note to the team", Some("writing"), options);
    assert_eq!(decision.selected, ModelCategory::Action);
    assert!(approx(decision.confidence, 0.95));
    assert_eq!(decision.rationale, "User preference: Large Action Model");
    assert_eq!(decision.fallbacks, vec![ModelCategory::LargeLanguage]);
}

#[test]
fn skill_decides_even_for_long_text() {
    let text = vec!["lorem"; 80].join(" ");
    let decision = route_message(&text, Some("code"), RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::SmallLanguage);
    assert!(approx(decision.confidence, 0.9));
    assert!(decision.patterns.is_empty());
    assert_eq!(decision.complexity, None);
}

#[test]
fn long_text_without_skill_escalates_to_experts() {
    let text = vec!["lorem"; 80].join(" ");
    let decision = route_message(&text, None, RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::MixtureOfExperts);
    assert!(approx(decision.confidence, 0.8));
    assert_eq!(decision.fallbacks, vec![ModelCategory::LargeLanguage]);
    assert_eq!(decision.complexity, Some(ComplexityLevel::High));
    assert!(decision.rationale.contains("escalated to Mixture of Experts"));
}

#[test]
fn empty_input_uses_default_category() {
    let decision = route_message("", None, RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::LargeLanguage);
    assert!(approx(decision.confidence, 0.5));
    assert!(decision.fallbacks.is_empty());
    assert!(decision.patterns.is_empty());
    assert_eq!(
        decision.rationale,
        "No specific patterns detected; using general-purpose Large Language Model"
    );
}

#[test]
fn caller_complexity_override_escalates_skill_selection() {
    let options = RouteOptions {
        complexity_level: Some(ComplexityLevel::High),
        ..Default::default()
    };
    let decision = route_message("summarize this", Some("summarize"), options);
    assert_eq!(decision.selected, ModelCategory::MixtureOfExperts);
    assert!(approx(decision.confidence, 0.9));
    assert_eq!(decision.fallbacks[0], ModelCategory::Concept);
    assert_eq!(decision.complexity, Some(ComplexityLevel::High));
}

#[test]
fn repeated_suggestions_appear_once_in_fallbacks() {
    // Image and segment both suggest sam.
    let decision = route_message("segment the photo", None, RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::VisionLanguage);
    assert_eq!(
        decision.fallbacks,
        vec![ModelCategory::Segmentation, ModelCategory::LargeLanguage]
    );
}

#[test]
fn unknown_skill_falls_back_to_analysis() {
    let decision = route_message(
        "segment the cat in this photo",
        Some("juggling"),
        RouteOptions::default(),
    );
    assert_eq!(decision.selected, ModelCategory::VisionLanguage);
    assert_eq!(
        decision.patterns,
        vec![PatternKind::Image, PatternKind::Segment]
    );
    assert_eq!(
        decision.fallbacks,
        vec![ModelCategory::Segmentation, ModelCategory::LargeLanguage]
    );
}

#[test]
fn skill_lookup_ignores_case_and_whitespace() {
    let decision = route_message("hello", Some("  Automate "), RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::Action);
}

#[test]
fn analyze_input_reports_patterns_and_suggestions() {
    let result = analyze_input("Write a python script and draw a diagram");
    assert_eq!(
        result.patterns,
        vec![PatternKind::Image, PatternKind::Code, PatternKind::Creative]
    );
    assert_eq!(
        result.suggested,
        vec![
            ModelCategory::VisionLanguage,
            ModelCategory::Segmentation,
            ModelCategory::SmallLanguage,
            ModelCategory::LargeLanguage,
        ]
    );
    assert_eq!(result.complexity, ComplexityLevel::Medium);
}

#[test]
fn configured_router_uses_overridden_default() {
    let config: RoutingConfig = toml::from_str(
        r#"
default_category = "mlm"
"#,
    )
    .unwrap();
    let router = ModelRouter::new(&config).unwrap();
    let decision = router.route("hi", None, RouteOptions::default());
    assert_eq!(decision.selected, ModelCategory::MaskedLanguage);
    assert!(decision.rationale.ends_with("Masked Language Model"));

    // Content routing now backs off to the configured default.
    let decision = router.route("translate to german", None, RouteOptions::default());
    assert_eq!(decision.fallbacks, vec![ModelCategory::MaskedLanguage]);
}

#[test]
fn configured_pattern_override_replaces_regex() {
    let config: RoutingConfig = toml::from_str(
        r#"
[patterns]
translate = "(?i)\\bverdeutsche\\b"
"#,
    )
    .unwrap();
    let router = ModelRouter::new(&config).unwrap();
    assert!(router.analyze("translate this").patterns.is_empty());
    assert_eq!(
        router.analyze("bitte verdeutsche das").patterns,
        vec![PatternKind::Translate]
    );
}

#[test]
fn decision_serializes_with_short_tags() {
    let decision = route_message("Translate this document into French", None, RouteOptions::default());
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["selected"], "lcm");
    assert_eq!(json["fallbacks"][0], "llm");
    assert_eq!(json["patterns"][0], "translate");
    assert_eq!(json["complexity"], "low");
}

fn skill_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec![
            "writing", "code", "image", "segment", "translate", "research", "automate", "nope",
        ])
        .prop_map(|s| Some(s.to_string())),
    ]
}

fn options_strategy() -> impl Strategy<Value = RouteOptions> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(prop::sample::select(vec![
            ComplexityLevel::Low,
            ComplexityLevel::Medium,
            ComplexityLevel::High,
        ])),
        prop::option::of(prop::sample::select(ModelCategory::ALL.to_vec())),
    )
        .prop_map(|(fast, complexity, preference)| RouteOptions {
            requires_fast_response: fast,
            complexity_level: complexity,
            user_preference: preference,
        })
}

proptest! {
    #[test]
    fn decisions_are_well_formed(
        text in ".{0,300}",
        skill in skill_strategy(),
        options in options_strategy(),
    ) {
        let decision = route_message(&text, skill.as_deref(), options);
        prop_assert!(!decision.fallbacks.contains(&decision.selected));
        prop_assert!(decision.fallbacks.len() <= 2);
        prop_assert!((0.0..=1.0).contains(&decision.confidence));
        prop_assert!(!decision.rationale.is_empty());

        let mut seen = decision.fallbacks.clone();
        seen.dedup();
        prop_assert_eq!(seen.len(), decision.fallbacks.len());

        if let Some(preferred) = options.user_preference {
            prop_assert_eq!(decision.selected, preferred);
        }
    }

    #[test]
    fn analysis_is_deterministic(text in ".{0,300}") {
        prop_assert_eq!(analyze_input(&text), analyze_input(&text));
    }

    #[test]
    fn any_text_mentioning_translate_suggests_concept_model(
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
    ) {
        let text = format!("{prefix}translate{suffix}");
        let analysis = analyze_input(&text);
        prop_assert!(analysis.patterns.contains(&PatternKind::Translate));
        prop_assert!(analysis.suggested.contains(&ModelCategory::Concept));
    }
}
