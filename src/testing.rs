//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::ContentItem;

/// Create an item with no tags or extra fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, kind: &str, title: &str, body: &str) -> ContentItem {
    ContentItem::new(id, kind, title, body)
}

/// Create a tool listing the way the directory feed shapes them.
pub fn make_tool(id: &str, name: &str, description: &str, tags: &[&str]) -> ContentItem {
    ContentItem::new(id, "tool", name, description)
        .with_tags(tags.iter().copied())
        .with_extra("pricing", "freemium")
}

/// Create a blog article.
pub fn make_article(id: &str, title: &str, excerpt: &str) -> ContentItem {
    ContentItem::new(id, "article", title, excerpt).with_extra("date", "2024-01-15")
}

/// A small mixed corpus of tools and articles.
pub fn sample_corpus() -> Vec<ContentItem> {
    vec![
        make_tool(
            "gpt-playground",
            "GPT-5 Playground",
            "Advanced AI playground for prompt experiments",
            &["AI", "NLP"],
        ),
        make_tool(
            "clipforge",
            "ClipForge",
            "Video editing with automatic captions",
            &["Video", "Editing"],
        ),
        make_tool(
            "pixelmuse",
            "PixelMuse",
            "Image generation from text prompts",
            &["Image", "Art"],
        ),
        make_article(
            "prompt-guide",
            "A practical guide to prompt writing",
            "How to get better answers from AI assistants",
        ),
        make_article(
            "video-ai",
            "AI video tools compared",
            "We tested five video generators",
        ),
    ]
}
