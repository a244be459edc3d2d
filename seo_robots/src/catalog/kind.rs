//! Directive kinds known to the engine
use super::value_rule::ValueRule;
use super::MAX_IMAGE_PREVIEW_VALUES;
use serde::{Deserialize, Serialize};

/// Every directive name in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    // === BASIC (NO MODIFICATION) ===
    Index,
    #[serde(rename = "noindex")]
    NoIndex,
    Follow,
    #[serde(rename = "nofollow")]
    NoFollow,
    #[serde(rename = "noarchive")]
    NoArchive,
    #[serde(rename = "nosnippet")]
    NoSnippet,
    #[serde(rename = "notranslate")]
    NoTranslate,
    #[serde(rename = "noimageindex")]
    NoImageIndex,
    None,
    All,

    // === ADVANCED (MODIFICATION REQUIRED) ===
    MaxSnippet,
    MaxImagePreview,
    MaxVideoPreview,
    #[serde(rename = "unavailable_after")]
    UnavailableAfter,
}

impl DirectiveKind {
    /// Exact directive name as written in robots values
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::NoIndex => "noindex",
            Self::Follow => "follow",
            Self::NoFollow => "nofollow",
            Self::NoArchive => "noarchive",
            Self::NoSnippet => "nosnippet",
            Self::NoTranslate => "notranslate",
            Self::NoImageIndex => "noimageindex",
            Self::None => "none",
            Self::All => "all",
            Self::MaxSnippet => "max-snippet",
            Self::MaxImagePreview => "max-image-preview",
            Self::MaxVideoPreview => "max-video-preview",
            Self::UnavailableAfter => "unavailable_after",
        }
    }

    /// Look up a kind by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "index" => Some(Self::Index),
            "noindex" => Some(Self::NoIndex),
            "follow" => Some(Self::Follow),
            "nofollow" => Some(Self::NoFollow),
            "noarchive" => Some(Self::NoArchive),
            "nosnippet" => Some(Self::NoSnippet),
            "notranslate" => Some(Self::NoTranslate),
            "noimageindex" => Some(Self::NoImageIndex),
            "none" => Some(Self::None),
            "all" => Some(Self::All),
            "max-snippet" => Some(Self::MaxSnippet),
            "max-image-preview" => Some(Self::MaxImagePreview),
            "max-video-preview" => Some(Self::MaxVideoPreview),
            "unavailable_after" => Some(Self::UnavailableAfter),
            _ => None,
        }
    }

    /// Advanced directives carry a modification (`max-snippet:50`)
    pub const fn is_advanced(self) -> bool {
        matches!(
            self,
            Self::MaxSnippet | Self::MaxImagePreview | Self::MaxVideoPreview | Self::UnavailableAfter
        )
    }

    /// Rule the modification must satisfy; `None` for basic directives
    pub fn value_rule(self) -> Option<ValueRule> {
        match self {
            Self::MaxSnippet | Self::MaxVideoPreview => Some(ValueRule::MinInteger(-1)),
            Self::MaxImagePreview => Some(ValueRule::OneOf(&MAX_IMAGE_PREVIEW_VALUES)),
            Self::UnavailableAfter => Some(ValueRule::DateTime),
            _ => None,
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
