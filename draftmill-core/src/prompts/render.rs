//! Placeholder substitution for instruction templates.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\{\{([^{}]*)\}\}").unwrap())
}

/// Substitute every `{{name}}` token in `template` with `vars[name]`.
///
/// Names absent from `vars` are replaced with the empty string, never left
/// verbatim. Substitution is a single pass over the original template, so
/// substituted values are not re-scanned for tokens.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    token_re()
        .replace_all(template, |caps: &regex::Captures| {
            vars.get(caps[1].trim()).cloned().unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_replaces_tokens() {
        let out = render(
            "유형은 {{유형}}, 목적은 {{목적}}입니다.",
            &vars(&[("유형", "news"), ("목적", "announce")]),
        );
        assert_eq!(out, "유형은 news, 목적은 announce입니다.");
    }

    #[test]
    fn test_render_absent_token_becomes_empty() {
        let out = render("앞{{없는값}}뒤", &vars(&[("유형", "news")]));
        assert_eq!(out, "앞뒤");
    }

    #[test]
    fn test_render_leaves_no_tokens_behind() {
        let out = render(
            "{{a}} {{b}} {{c}}",
            &vars(&[("a", "1")]),
        );
        assert!(!out.contains("{{"));
        assert!(!out.contains("}}"));
    }

    #[test]
    fn test_render_repeated_token() {
        let out = render("{{x}}-{{x}}-{{x}}", &vars(&[("x", "y")]));
        assert_eq!(out, "y-y-y");
    }

    #[test]
    fn test_render_does_not_recurse_into_values() {
        // A substituted value that itself looks like a token must survive
        // as-is; only the original template is scanned.
        let out = render("{{a}}", &vars(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn test_render_without_tokens_is_identity() {
        let out = render("그냥 텍스트", &HashMap::new());
        assert_eq!(out, "그냥 텍스트");
    }
}
