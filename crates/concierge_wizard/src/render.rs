//! Placeholder substitution for prompt templates.
//!
//! Placeholders are `{name}` where `name` is an identifier
//! (`[A-Za-z_][A-Za-z0-9_]*`). Anything else in braces, such as a JSON
//! example inside a template, is plain text.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Valid placeholder regex")
});

/// Substitute every occurrence of each supplied placeholder.
///
/// Unknown placeholders stay verbatim and values are inserted as-is, so a
/// value containing `{other}` is never substituted again. Never fails.
///
/// # Examples
///
/// ```
/// use concierge_wizard::render;
///
/// let out = render("{a} and {a}, not {b}", [("a", "x")]);
/// assert_eq!(out, "x and x, not {b}");
/// ```
pub fn render<I, K, V>(template: &str, values: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let values: HashMap<String, String> = values
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();

    if values.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names in order of first appearance.
///
/// # Examples
///
/// ```
/// use concierge_wizard::placeholders;
///
/// let names = placeholders(r#"{history} then [{"text": "x"}] and {history}"#);
/// assert_eq!(names, vec!["history"]);
/// ```
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_all_occurrences() {
        let out = render("{x}-{x}-{x}", [("x", "1")]);
        assert_eq!(out, "1-1-1");
    }

    #[test]
    fn test_untouched_without_matching_keys() {
        let template = "Step list:\n{history}\n[{\"text\": \"\", \"icon\": \"\"}]";
        assert_eq!(render(template, [("preference", "v")]), template);
        assert_eq!(render(template, Vec::<(&str, &str)>::new()), template);
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render("{a} {b}", [("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b} B");
    }

    #[test]
    fn test_placeholders_skip_json_braces() {
        let names = placeholders("{goal} in {locality}: {\"text\": 1} {goal}");
        assert_eq!(names, vec!["goal", "locality"]);
    }
}
