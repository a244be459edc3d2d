use super::{render_token, UniqueTokens};
use crate::directive::Directive;

/// Meta-robots value for a structured collection.
///
/// Bot scope is ignored: a meta tag addresses every crawler. Directive names
/// are uppercased, modifications are left as given.
pub fn build_from_structured(directives: &[Directive]) -> String {
    let mut tokens = UniqueTokens::default();

    for directive in directives.iter().filter(|directive| !directive.is_empty()) {
        tokens.push(render_token(
            &directive.value().to_uppercase(),
            directive.modification(),
        ));
    }

    tokens.join()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_in_input_order() {
        let directives = vec![
            Directive::new("noindex"),
            Directive::new("nofollow"),
            Directive::new("max-snippet").with_modification("50"),
        ];
        assert_eq!(
            build_from_structured(&directives),
            "NOINDEX, NOFOLLOW, MAX-SNIPPET:50"
        );
    }

    #[test]
    fn test_duplicates_rendered_once() {
        let directives = vec![Directive::new("noindex"), Directive::new("noindex")];
        assert_eq!(build_from_structured(&directives), "NOINDEX");
    }

    #[test]
    fn test_case_variants_collapse() {
        let directives = vec![Directive::new("noindex"), Directive::new("NoIndex")];
        assert_eq!(build_from_structured(&directives), "NOINDEX");
    }

    #[test]
    fn test_bot_scope_ignored_and_empty_values_skipped() {
        let directives = vec![
            Directive::new("noindex").with_bot("googlebot"),
            Directive::new("").with_bot("bingbot"),
            Directive::new("max-image-preview").with_modification("large"),
        ];
        assert_eq!(
            build_from_structured(&directives),
            "NOINDEX, MAX-IMAGE-PREVIEW:large"
        );
    }

    #[test]
    fn test_invalid_modification_still_rendered() {
        let directives = vec![Directive::new("max-snippet").with_modification("abc")];
        assert_eq!(build_from_structured(&directives), "MAX-SNIPPET:abc");
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(build_from_structured(&[]), "");
    }
}
