//! Legacy flat-string input: `name`, `name:value`, `bot:name`, `bot:name:value`

use super::{UniqueTokens, DIRECTIVE_SEPARATOR};
use crate::catalog::{is_advanced_directive, ADVANCED_DIRECTIVE_NAMES};
use crate::directive::scope::GLOBAL_SCOPE;
use crate::directive::Directive;

/// Meta-robots value for a flat token list.
///
/// A token is bot-prefixed when its first `:` part is not an advanced
/// directive name. Unprefixed tokens render first, then one
/// `BOT: DIRECTIVES` group per bot in first-seen order. Everything is
/// uppercased, modifications included.
pub fn build_from_flat<S: AsRef<str>>(directives: &[S]) -> String {
    let mut groups: Vec<(String, UniqueTokens)> = Vec::new();

    for entry in directives {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            continue;
        }

        let (scope, directive) = split_bot_prefix(entry);
        if directive.is_empty() {
            continue;
        }

        let key = scope.map_or_else(|| GLOBAL_SCOPE.to_string(), str::to_uppercase);
        let index = match groups.iter().position(|(group, _)| *group == key) {
            Some(index) => index,
            None => {
                groups.push((key, UniqueTokens::default()));
                groups.len() - 1
            }
        };
        groups[index].1.push(directive.to_uppercase());
    }

    let (global, scoped): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|(key, _)| key == GLOBAL_SCOPE);

    global
        .into_iter()
        .map(|(_, tokens)| tokens.join())
        .chain(
            scoped
                .into_iter()
                .map(|(bot, tokens)| format!("{}: {}", bot, tokens.join())),
        )
        .collect::<Vec<_>>()
        .join(DIRECTIVE_SEPARATOR)
}

fn split_bot_prefix(entry: &str) -> (Option<&str>, &str) {
    match entry.split_once(':') {
        Some((first, rest)) if !is_advanced_directive(&first.trim().to_lowercase()) => {
            let bot = first.trim();
            if bot.is_empty() {
                (None, rest.trim())
            } else {
                (Some(bot), rest.trim())
            }
        }
        _ => (None, entry),
    }
}

/// Parse every non-blank flat token into a structured directive
pub fn convert_legacy_flat_to_structured<S: AsRef<str>>(directives: &[S]) -> Vec<Directive> {
    directives
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| Directive::parse(entry, &ADVANCED_DIRECTIVE_NAMES))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_only() {
        assert_eq!(
            build_from_flat(&["noindex", "nofollow", "max-snippet:50"]),
            "NOINDEX, NOFOLLOW, MAX-SNIPPET:50"
        );
    }

    #[test]
    fn test_bot_groups_follow_global() {
        assert_eq!(
            build_from_flat(&["googlebot:noindex", "noarchive", "googlebot:follow"]),
            "NOARCHIVE, GOOGLEBOT: NOINDEX, FOLLOW"
        );
    }

    #[test]
    fn test_bot_with_advanced_directive() {
        assert_eq!(
            build_from_flat(&["bingbot:max-image-preview:large"]),
            "BINGBOT: MAX-IMAGE-PREVIEW:LARGE"
        );
    }

    #[test]
    fn test_duplicates_and_blanks_skipped() {
        assert_eq!(
            build_from_flat(&["noindex", " ", "NOINDEX", "googlebot:", "nofollow"]),
            "NOINDEX, NOFOLLOW"
        );
    }

    #[test]
    fn test_convert_flat_to_structured() {
        let directives =
            convert_legacy_flat_to_structured(&["noindex", "", "max-snippet:50", "googlebot:nofollow"]);

        assert_eq!(
            directives,
            vec![
                Directive::new("noindex"),
                Directive::new("max-snippet").with_modification("50"),
                Directive::new("nofollow").with_bot("googlebot"),
            ]
        );
    }

    #[test]
    fn test_convert_three_part_token() {
        let directives =
            convert_legacy_flat_to_structured(&["googlebot:unavailable_after:2025-12-31 10:00:00"]);
        assert_eq!(directives[0].bot(), "googlebot");
        assert_eq!(directives[0].value(), "unavailable_after");
        assert_eq!(directives[0].modification(), "2025-12-31 10:00:00");
    }
}
