//! Descriptive catalog for administrative UIs
//!
//! Rendering hints only. Nothing in validation or building reads from here; the
//! modification metadata and conflict lists are derived from the rule tables so the
//! two cannot drift apart.

use super::{conflicts_of, DirectiveKind, ValueRule};
use serde::Serialize;
use std::collections::BTreeMap;

/// UI grouping for directives, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Indexing,
    Snippets,
    Images,
    Translations,
    Crawling,
}

/// Input control the UI renders for a modification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputKind {
    Number { min: i64 },
    Select { options: Vec<&'static str> },
    Datetime,
}

/// How the UI joins name and modification when previewing a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatHint {
    NumericWithColon,
    LiteralWithColon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationSpec {
    pub input: InputKind,
    pub format: FormatHint,
}

impl ModificationSpec {
    fn from_rule(rule: ValueRule) -> Self {
        match rule {
            ValueRule::MinInteger(min) => Self {
                input: InputKind::Number { min },
                format: FormatHint::NumericWithColon,
            },
            ValueRule::OneOf(options) => Self {
                input: InputKind::Select {
                    options: options.to_vec(),
                },
                format: FormatHint::LiteralWithColon,
            },
            ValueRule::DateTime => Self {
                input: InputKind::Datetime,
                format: FormatHint::LiteralWithColon,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification: Option<ModificationSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<&'static str>,
}

const DESCRIPTIONS: [(DirectiveKind, Category, &str, &str); 14] = [
    (
        DirectiveKind::Index,
        Category::Indexing,
        "Index",
        "Allow search engines to index this page.",
    ),
    (
        DirectiveKind::NoIndex,
        Category::Indexing,
        "No Index",
        "Do not show this page in search results.",
    ),
    (
        DirectiveKind::All,
        Category::Indexing,
        "All",
        "No restrictions on indexing or serving. Equivalent to index, follow.",
    ),
    (
        DirectiveKind::None,
        Category::Indexing,
        "None",
        "Equivalent to noindex, nofollow.",
    ),
    (
        DirectiveKind::UnavailableAfter,
        Category::Indexing,
        "Unavailable After",
        "Do not show this page in search results after the given date/time.",
    ),
    (
        DirectiveKind::NoSnippet,
        Category::Snippets,
        "No Snippet",
        "Do not show a text snippet or video preview in search results.",
    ),
    (
        DirectiveKind::MaxSnippet,
        Category::Snippets,
        "Max Snippet",
        "Maximum number of characters in a text snippet. 0 disables snippets, -1 means no limit.",
    ),
    (
        DirectiveKind::MaxVideoPreview,
        Category::Snippets,
        "Max Video Preview",
        "Maximum number of seconds for a video preview. 0 allows a static image only, -1 means no limit.",
    ),
    (
        DirectiveKind::NoImageIndex,
        Category::Images,
        "No Image Index",
        "Do not index images on this page.",
    ),
    (
        DirectiveKind::MaxImagePreview,
        Category::Images,
        "Max Image Preview",
        "Maximum size of an image preview: none, standard or large.",
    ),
    (
        DirectiveKind::NoTranslate,
        Category::Translations,
        "No Translate",
        "Do not offer a translation of this page in search results.",
    ),
    (
        DirectiveKind::Follow,
        Category::Crawling,
        "Follow",
        "Allow search engines to follow links on this page.",
    ),
    (
        DirectiveKind::NoFollow,
        Category::Crawling,
        "No Follow",
        "Do not follow links on this page.",
    ),
    (
        DirectiveKind::NoArchive,
        Category::Crawling,
        "No Archive",
        "Do not show a cached link in search results.",
    ),
];

/// Build the descriptor for a single directive
pub fn describe(kind: DirectiveKind) -> Option<DirectiveDescriptor> {
    DESCRIPTIONS
        .iter()
        .find(|(described, ..)| *described == kind)
        .map(|&(kind, _, label, description)| DirectiveDescriptor {
            name: kind.as_str(),
            label,
            description,
            modification: kind.value_rule().map(ModificationSpec::from_rule),
            conflicts: conflicts_of(kind).into_iter().map(DirectiveKind::as_str).collect(),
        })
}

/// Category name → descriptors, categories in display order
pub fn presentation_catalog() -> BTreeMap<Category, Vec<DirectiveDescriptor>> {
    let mut catalog: BTreeMap<Category, Vec<DirectiveDescriptor>> = BTreeMap::new();

    for &(kind, category, ..) in DESCRIPTIONS.iter() {
        if let Some(descriptor) = describe(kind) {
            catalog.entry(category).or_default().push(descriptor);
        }
    }

    catalog
}
