//! Bot scoping shared by the validator and the X-Robots builder
use super::Directive;

/// Group key for directives without a bot
pub const GLOBAL_SCOPE: &str = "*";

/// Case-insensitive scope key; an empty bot is the global scope
pub fn scope_key(bot: &str) -> String {
    let bot = bot.trim();
    if bot.is_empty() {
        GLOBAL_SCOPE.to_string()
    } else {
        bot.to_lowercase()
    }
}

/// Directives sharing one scope, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BotGroup<'a> {
    pub key: String,
    pub directives: Vec<&'a Directive>,
}

impl BotGroup<'_> {
    pub fn is_global(&self) -> bool {
        self.key == GLOBAL_SCOPE
    }
}

/// Group by scope key; groups appear in first-seen order
pub fn group_by_bot(directives: &[Directive]) -> Vec<BotGroup<'_>> {
    let mut groups: Vec<BotGroup<'_>> = Vec::new();

    for directive in directives {
        let key = scope_key(directive.bot());
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.directives.push(directive),
            None => groups.push(BotGroup {
                key,
                directives: vec![directive],
            }),
        }
    }

    groups
}
