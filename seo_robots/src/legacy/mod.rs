//! Legacy numeric robots codes
//!
//! Earlier configuration stored robots behaviour as an integer. The table below
//! is the only record of what those integers meant and must not change.

pub mod migration;

pub use migration::{
    migrate_code_setting, migrate_configuration, migrate_rules, MigrationError, MigrationReport,
    RulesMigration,
};

use crate::catalog::DirectiveKind::{self, Follow, Index, NoArchive, NoFollow, NoIndex};
use crate::directive::Directive;

pub type LegacyCode = i64;

pub const NOINDEX_NOFOLLOW: LegacyCode = 1;
pub const NOINDEX_FOLLOW: LegacyCode = 2;
pub const INDEX_NOFOLLOW: LegacyCode = 3;
pub const INDEX_FOLLOW: LegacyCode = 4;
pub const NOINDEX_NOFOLLOW_NOARCHIVE: LegacyCode = 5;
pub const NOINDEX_FOLLOW_NOARCHIVE: LegacyCode = 6;
pub const INDEX_NOFOLLOW_NOARCHIVE: LegacyCode = 7;
pub const INDEX_FOLLOW_NOARCHIVE: LegacyCode = 8;

/// Directive set used for any code outside the table
pub const DEFAULT_DIRECTIVES: &[DirectiveKind] = &[Index, Follow];

const LEGACY_CODE_MAP: [(LegacyCode, &[DirectiveKind]); 8] = [
    (NOINDEX_NOFOLLOW, &[NoIndex, NoFollow]),
    (NOINDEX_FOLLOW, &[NoIndex, Follow]),
    (INDEX_NOFOLLOW, &[Index, NoFollow]),
    (INDEX_FOLLOW, &[Index, Follow]),
    (NOINDEX_NOFOLLOW_NOARCHIVE, &[NoIndex, NoFollow, NoArchive]),
    (NOINDEX_FOLLOW_NOARCHIVE, &[NoIndex, Follow, NoArchive]),
    (INDEX_NOFOLLOW_NOARCHIVE, &[Index, NoFollow, NoArchive]),
    (INDEX_FOLLOW_NOARCHIVE, &[Index, Follow, NoArchive]),
];

/// Directive kinds for a legacy code; unknown codes fall back to `index, follow`
pub fn code_to_kinds(code: LegacyCode) -> &'static [DirectiveKind] {
    LEGACY_CODE_MAP
        .iter()
        .find(|(mapped, _)| *mapped == code)
        .map_or(DEFAULT_DIRECTIVES, |(_, kinds)| *kinds)
}

/// Directive names for a legacy code
pub fn code_to_directives(code: LegacyCode) -> Vec<&'static str> {
    code_to_kinds(code).iter().map(|kind| kind.as_str()).collect()
}

/// Directive records for a legacy code, all global
pub fn code_to_structured(code: LegacyCode) -> Vec<Directive> {
    code_to_kinds(code)
        .iter()
        .map(|kind| Directive::new(kind.as_str()))
        .collect()
}

/// Meta-robots string as the first release rendered it, without a space after the comma
pub fn meta_robots_by_code(code: LegacyCode) -> &'static str {
    match code {
        NOINDEX_NOFOLLOW => "NOINDEX,NOFOLLOW",
        NOINDEX_FOLLOW => "NOINDEX,FOLLOW",
        INDEX_NOFOLLOW => "INDEX,NOFOLLOW",
        _ => "INDEX,FOLLOW",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_from_structured;

    #[test]
    fn test_code_table() {
        assert_eq!(code_to_directives(1), vec!["noindex", "nofollow"]);
        assert_eq!(code_to_directives(2), vec!["noindex", "follow"]);
        assert_eq!(code_to_directives(3), vec!["index", "nofollow"]);
        assert_eq!(code_to_directives(4), vec!["index", "follow"]);
        assert_eq!(code_to_directives(5), vec!["noindex", "nofollow", "noarchive"]);
        assert_eq!(code_to_directives(6), vec!["noindex", "follow", "noarchive"]);
        assert_eq!(code_to_directives(7), vec!["index", "nofollow", "noarchive"]);
        assert_eq!(code_to_directives(8), vec!["index", "follow", "noarchive"]);
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(code_to_directives(99), vec!["index", "follow"]);
        assert_eq!(code_to_directives(0), vec!["index", "follow"]);
        assert_eq!(code_to_directives(-3), vec!["index", "follow"]);
    }

    #[test]
    fn test_structured_codes_render() {
        assert_eq!(
            build_from_structured(&code_to_structured(NOINDEX_FOLLOW_NOARCHIVE)),
            "NOINDEX, FOLLOW, NOARCHIVE"
        );
        assert!(code_to_structured(INDEX_FOLLOW).iter().all(Directive::is_global));
    }

    #[test]
    fn test_meta_robots_by_code() {
        assert_eq!(meta_robots_by_code(NOINDEX_NOFOLLOW), "NOINDEX,NOFOLLOW");
        assert_eq!(meta_robots_by_code(NOINDEX_FOLLOW), "NOINDEX,FOLLOW");
        assert_eq!(meta_robots_by_code(INDEX_NOFOLLOW), "INDEX,NOFOLLOW");
        assert_eq!(meta_robots_by_code(INDEX_FOLLOW), "INDEX,FOLLOW");
        assert_eq!(meta_robots_by_code(NOINDEX_NOFOLLOW_NOARCHIVE), "INDEX,FOLLOW");
    }
}
