//! Static directive catalog
//!
//! Read-only rule tables: basic and advanced directive sets, value rules, conflict pairs,
//! plus the descriptive catalog consumed by administrative UIs. All tables are constants
//! and safe to read from any thread.

pub mod kind;
pub mod presentation;
pub mod value_rule;

pub use kind::DirectiveKind;
pub use presentation::{presentation_catalog, Category, DirectiveDescriptor};
pub use value_rule::{parse_date_time, ValueRule};

/// Directives that never take a modification
pub const BASIC_DIRECTIVES: [DirectiveKind; 10] = [
    DirectiveKind::Index,
    DirectiveKind::NoIndex,
    DirectiveKind::Follow,
    DirectiveKind::NoFollow,
    DirectiveKind::NoArchive,
    DirectiveKind::NoSnippet,
    DirectiveKind::NoTranslate,
    DirectiveKind::NoImageIndex,
    DirectiveKind::None,
    DirectiveKind::All,
];

/// Directives that require a modification
pub const ADVANCED_DIRECTIVES: [DirectiveKind; 4] = [
    DirectiveKind::MaxSnippet,
    DirectiveKind::MaxImagePreview,
    DirectiveKind::MaxVideoPreview,
    DirectiveKind::UnavailableAfter,
];

/// Advanced directive names; the tiebreaker for two-part `a:b` tokens
pub const ADVANCED_DIRECTIVE_NAMES: [&str; 4] = [
    DirectiveKind::MaxSnippet.as_str(),
    DirectiveKind::MaxImagePreview.as_str(),
    DirectiveKind::MaxVideoPreview.as_str(),
    DirectiveKind::UnavailableAfter.as_str(),
];

/// Allowed `max-image-preview` values
pub const MAX_IMAGE_PREVIEW_VALUES: [&str; 3] = ["none", "standard", "large"];

/// Unordered pairs that must not appear together in one scope
pub const CONFLICT_PAIRS: [(DirectiveKind, DirectiveKind); 7] = [
    (DirectiveKind::Index, DirectiveKind::NoIndex),
    (DirectiveKind::Follow, DirectiveKind::NoFollow),
    (DirectiveKind::All, DirectiveKind::None),
    (DirectiveKind::All, DirectiveKind::NoIndex),
    (DirectiveKind::All, DirectiveKind::NoFollow),
    (DirectiveKind::None, DirectiveKind::Index),
    (DirectiveKind::None, DirectiveKind::Follow),
];

/// Basic directive names in catalog order
pub fn basic_directive_names() -> Vec<&'static str> {
    BASIC_DIRECTIVES.iter().map(|kind| kind.as_str()).collect()
}

/// Advanced directive names in catalog order
pub fn advanced_directive_names() -> Vec<&'static str> {
    ADVANCED_DIRECTIVE_NAMES.to_vec()
}

/// Exact-name membership in the basic set
pub fn is_basic_directive(name: &str) -> bool {
    DirectiveKind::from_name(name).is_some_and(|kind| !kind.is_advanced())
}

/// Exact-name membership in the advanced set
pub fn is_advanced_directive(name: &str) -> bool {
    DirectiveKind::from_name(name).is_some_and(DirectiveKind::is_advanced)
}

/// Directives that conflict with `kind`, in conflict-table order
pub fn conflicts_of(kind: DirectiveKind) -> Vec<DirectiveKind> {
    CONFLICT_PAIRS
        .iter()
        .filter_map(|&(first, second)| {
            if first == kind {
                Some(second)
            } else if second == kind {
                Some(first)
            } else {
                None
            }
        })
        .collect()
}
