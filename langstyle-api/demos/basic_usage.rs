//! Basic usage of the langstyle API
//!
//! Run with: cargo run --example basic_usage

use langstyle_api::{walk_document, Element, Node, ProcessorOptions, Result, StyleProcessor};

fn main() -> Result<()> {
    let options = ProcessorOptions::builder()
        .languages(["Arabic", "Chinese", "English"])
        .custom_class("English", "latin")
        .build()?;
    let processor = StyleProcessor::with_options(options)?;

    let result = processor.process_text("Hello مرحبا 你好 world")?;
    println!("Markup: {}", result.rendered_markup);
    println!(
        "Segments: {}, characters: {}, languages: {:?}",
        result.stats.segment_count, result.stats.character_count, result.stats.languages_detected
    );
    for segment in &result.segments {
        println!(
            "  {:<10} {:?} (rtl: {})",
            segment.language, segment.text, segment.is_rtl
        );
    }

    let mut document = Node::from(
        Element::new("article")
            .with_child(Element::new("h1").with_child("Greetings مرحبا"))
            .with_child(Element::new("script").with_child("console.log('你好')")),
    );
    let rewritten = walk_document(&mut document, &processor);
    println!("\nRewrote {rewritten} text nodes:\n{}", document.to_markup());

    Ok(())
}
