//! Property tests for segmentation invariants

use langstyle_core::{
    merge, render, segment, ActiveConfiguration, LanguageRegistry, RenderOptions,
};
use proptest::prelude::*;

fn config(names: &[&str]) -> ActiveConfiguration {
    ActiveConfiguration::from_names(&LanguageRegistry::builtin(), names).unwrap()
}

fn concat(segments: &[langstyle_core::Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

proptest! {
    #[test]
    fn prop_segments_reconstruct_text(text in "\\PC{1,60}") {
        let config = ActiveConfiguration::all(&LanguageRegistry::builtin());
        let segments = segment(&text, &config).unwrap();
        prop_assert_eq!(concat(&segments), text.clone());
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));

        let merged = merge(segments);
        prop_assert_eq!(concat(&merged), text);
    }

    #[test]
    fn prop_adjacent_segments_differ(text in "[a-z0-9 \u{0600}-\u{06FF}]{1,40}") {
        let segments = segment(&text, &config(&["Numbers", "Arabic", "English"])).unwrap();
        for pair in segments.windows(2) {
            prop_assert_ne!(&pair[0].language, &pair[1].language);
        }
    }

    #[test]
    fn prop_latin_text_is_one_tag(text in "[a-zA-Z ]{1,40}") {
        let config = config(&["English"]);
        let segments = merge(segment(&text, &config).unwrap());
        prop_assert_eq!(segments.len(), 1);

        let html = render(&segments, &RenderOptions::default());
        prop_assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn prop_arabic_text_is_one_tag(text in "[\u{0621}-\u{064A} ]{1,40}") {
        let config = config(&["Arabic"]);
        let segments = merge(segment(&text, &config).unwrap());
        prop_assert_eq!(segments.len(), 1);
    }

    #[test]
    fn prop_merge_is_idempotent(text in "[a-z]{1,8}( [a-z]{1,8}){0,5}") {
        let config = config(&["English"]);
        let merged = merge(segment(&text, &config).unwrap());
        prop_assert_eq!(merged.len(), 1);

        let again = merge(segment(&merged[0].text, &config).unwrap());
        prop_assert_eq!(again.len(), 1);
        prop_assert_eq!(&again[0].language, &merged[0].language);
        prop_assert_eq!(&again[0].text, &merged[0].text);
    }
}
