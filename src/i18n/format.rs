//! Parameter substitution for `{name}` placeholders

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is a valid regex")
    })
}

/// Replace every `{name}` in `template` with `params[name]`.
///
/// Placeholders without a matching parameter are left verbatim. Substituted
/// values are not scanned again.
pub fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let replaced: Cow<'_, str> = placeholder_pattern().replace_all(template, |caps: &Captures<'_>| {
        match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });
    replaced.into_owned()
}

/// Build parameters from `(name, value)` pairs
pub fn params<I, K, V>(pairs: I) -> TranslationParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.to_string()))
        .collect()
}
