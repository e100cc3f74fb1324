//! End-to-end tests for segment, merge and render

use langstyle_core::{
    merge, merge_with, render, segment, unescape_text, ActiveConfiguration, CharSet,
    LanguageEntry, LanguageRegistry, MergeOptions, RenderOptions, StyleError, StyleOverrides,
    WHITESPACE_LANGUAGE,
};

fn config(names: &[&str]) -> ActiveConfiguration {
    ActiveConfiguration::from_names(&LanguageRegistry::builtin(), names).unwrap()
}

fn pipeline(text: &str, config: &ActiveConfiguration) -> String {
    let segments = merge(segment(text, config).unwrap());
    render(&segments, &RenderOptions::default())
}

#[test]
fn test_english_arabic_mixed() {
    let config = config(&["Arabic", "English"]);
    let segments = merge(segment("Hello مرحبا", &config).unwrap());

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "Hello ");
    assert_eq!(segments[0].language, "English");
    assert!(!segments[0].is_rtl);
    assert_eq!(segments[1].text, "مرحبا");
    assert_eq!(segments[1].language, "Arabic");
    assert!(segments[1].is_rtl);

    let html = render(&segments, &RenderOptions::default());
    assert_eq!(html.matches("<span").count(), 2);
    assert!(html.contains(r#"class="lang-arabic" dir="rtl""#));
}

#[test]
fn test_single_script_sentence_is_one_tag() {
    let html = pipeline("The quick brown fox ", &config(&["English"]));
    assert_eq!(html.matches("<span").count(), 1);
    assert!(html.ends_with(">The quick brown fox </span>"));
}

#[test]
fn test_repeated_bridged_runs_merge() {
    let segments = merge(segment("A B A", &config(&["English"])).unwrap());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "A B A");
}

#[test]
fn test_digit_priority() {
    let digits_first = merge(segment("5", &config(&["Numbers", "English"])).unwrap());
    assert_eq!(digits_first[0].language, "Numbers");

    let latin_first = merge(segment("5", &config(&["English", "Numbers"])).unwrap());
    assert_eq!(latin_first[0].language, "English");
}

#[test]
fn test_empty_input_rejected() {
    let result = segment("", &config(&["English"]));
    assert!(matches!(result, Err(StyleError::InvalidInput(_))));
}

#[test]
fn test_escaping_round_trip() {
    let text = r#"if a < b && c > "d""#;
    let config = config(&["English"]);
    let segments = merge(segment(text, &config).unwrap());
    let html = render(&segments, &RenderOptions::default());

    assert!(!html.contains("a < b"));
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;&amp;"));
    assert_eq!(html.matches("&quot;").count(), 2);
    assert!(html.ends_with("&quot;</span>"));

    let mut recovered = String::new();
    for piece in html.split("</span>").filter(|piece| !piece.is_empty()) {
        let content_start = piece.find('>').unwrap() + 1;
        recovered.push_str(&unescape_text(&piece[content_start..]));
    }
    assert_eq!(recovered, text);
}

#[test]
fn test_custom_overrides_flow_into_markup() {
    let registry = LanguageRegistry::builtin();
    let mut overrides = StyleOverrides::default();
    overrides
        .custom_classes
        .insert("English".to_string(), "latin".to_string());
    overrides
        .custom_fonts
        .insert("English".to_string(), "Georgia".to_string());
    let config = ActiveConfiguration::builder(&registry)
        .languages(&["English"])
        .overrides(overrides)
        .build()
        .unwrap();

    assert_eq!(
        pipeline("Hi", &config),
        r#"<span class="latin" style="font-family: Georgia">Hi</span>"#
    );
}

#[test]
fn test_rtl_disabled() {
    let registry = LanguageRegistry::builtin();
    let config = ActiveConfiguration::builder(&registry)
        .languages(&["Hebrew"])
        .overrides(StyleOverrides {
            enable_rtl: false,
            ..StyleOverrides::default()
        })
        .build()
        .unwrap();

    let html = pipeline("שלום", &config);
    assert!(!html.contains("dir="));
}

#[test]
fn test_registered_language_participates() {
    let mut registry = LanguageRegistry::builtin();
    registry
        .register(LanguageEntry::new(
            "Klingon",
            CharSet::new().with_range('\u{F8D0}', '\u{F8FF}'),
            "lang-klingon",
        ))
        .unwrap();
    let config = ActiveConfiguration::from_names(&registry, &["Klingon", "English"]).unwrap();

    let segments = merge(segment("Qapla \u{F8D0}\u{F8D1}", &config).unwrap());
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].language, "Klingon");
}

#[test]
fn test_preserved_spaces() {
    let segments = merge_with(
        segment("Hello مرحبا", &config(&["Arabic", "English"])).unwrap(),
        MergeOptions {
            fuse_bridged_whitespace: true,
            attach_stranded_whitespace: false,
        },
    );
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].language, WHITESPACE_LANGUAGE);
    assert_eq!(segments[1].style_class, "lang-default");
}

#[test]
fn test_group_configuration() {
    let registry = LanguageRegistry::builtin();
    let group = registry.group("EastAsian").unwrap().to_vec();
    let config = ActiveConfiguration::from_names(&registry, &group).unwrap();

    let segments = merge(segment("日本語 한국어", &config).unwrap());
    assert!(segments.len() >= 2);
    assert!(segments.iter().any(|s| s.language == "Korean"));
}
