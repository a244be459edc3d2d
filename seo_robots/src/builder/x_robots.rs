use super::{render_token, UniqueTokens, DIRECTIVE_SEPARATOR};
use crate::directive::scope::group_by_bot;
use crate::directive::Directive;

/// X-Robots-Tag value for a structured collection.
///
/// Directives are grouped per bot (case-insensitive). The global group comes
/// first and is uppercased whole; every other group is rendered as
/// `bot: DIRECTIVES` with the bot label kept lowercase.
pub fn build_x_robots_from_structured(directives: &[Directive]) -> String {
    let mut global = None;
    let mut scoped = Vec::new();

    for group in group_by_bot(directives) {
        let mut tokens = UniqueTokens::default();
        for directive in group.directives.iter().filter(|directive| !directive.is_empty()) {
            tokens.push(render_token(
                &directive.value().to_lowercase(),
                directive.modification(),
            ));
        }

        if tokens.is_empty() {
            continue;
        }

        let joined = tokens.join().to_uppercase();
        if group.is_global() {
            global = Some(joined);
        } else {
            scoped.push(format!("{}: {}", group.key, joined));
        }
    }

    global
        .into_iter()
        .chain(scoped)
        .collect::<Vec<_>>()
        .join(DIRECTIVE_SEPARATOR)
}
