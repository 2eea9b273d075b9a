#![allow(dead_code)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use crate::common::Segment;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Flag spellings seen in real corpora; only `True` counts as set.
pub fn arb_flag() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("True".to_string()),
        3 => Just("False".to_string()),
        1 => Just("true".to_string()),
        1 => Just(String::new()),
    ]
}

pub fn arb_segment() -> impl Strategy<Value = Segment> {
    (
        0u64..100_000,
        0u64..20_000,
        "([a-z]{1,6}( [a-z]{1,6}){0,2})?",
        0u32..=100,
        arb_flag(),
        arb_flag(),
    )
        .prop_map(|(start_ms, length, text, confidence, is_translation, corrected)| Segment {
            start_ms,
            end_ms: start_ms + length,
            text,
            confidence: format!("{:.2}", f64::from(confidence) / 100.0),
            is_translation,
            manually_corrected: corrected,
        })
}

/// One to four distinct languages, each with up to `max_segments` segments.
pub fn arb_languages(max_segments: usize) -> impl Strategy<Value = Vec<(String, Vec<Segment>)>> {
    prop::collection::btree_set("[a-z]{3}", 1..=4).prop_flat_map(move |codes: BTreeSet<String>| {
        let count = codes.len();
        prop::collection::vec(prop::collection::vec(arb_segment(), 0..=max_segments), count)
            .prop_map(move |segments| codes.iter().cloned().zip(segments).collect::<Vec<_>>())
    })
}

/// Renders generated languages through the shared EAF builder.
pub fn render(languages: &[(String, Vec<Segment>)]) -> String {
    let borrowed: Vec<(&str, Vec<Segment>)> = languages
        .iter()
        .map(|(code, segments)| (code.as_str(), segments.clone()))
        .collect();
    crate::common::build_eaf(&borrowed)
}
