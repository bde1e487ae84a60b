//! Locale identifiers and language-tag sources
//!
//! Locale identifiers are an open string namespace. [`SupportedLocale`] lists the
//! identifiers the library knows by name; only `en` and `ja` ship with a bundle.

use std::fmt;
use std::str::FromStr;

/// Locale every lookup falls back to
pub const DEFAULT_LOCALE: &str = "en";

/// Bundles embedded in the library, keyed by locale
pub const BUILT_IN_BUNDLES: [(&str, &str); 2] = [
    ("en", include_str!("../../locales/en.json")),
    ("ja", include_str!("../../locales/ja.json")),
];

/// Whether `locale` ships with an embedded bundle
pub fn is_built_in(locale: &str) -> bool {
    BUILT_IN_BUNDLES.iter().any(|(code, _)| *code == locale)
}

/// Locale identifiers known to the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    En,
    Ja,
    Es,
    Fr,
    De,
    ZhCn,
    ZhTw,
    Ko,
    It,
    Pt,
    Ru,
    Ar,
    Hi,
}

impl SupportedLocale {
    pub const ALL: [SupportedLocale; 13] = [
        SupportedLocale::En,
        SupportedLocale::Ja,
        SupportedLocale::Es,
        SupportedLocale::Fr,
        SupportedLocale::De,
        SupportedLocale::ZhCn,
        SupportedLocale::ZhTw,
        SupportedLocale::Ko,
        SupportedLocale::It,
        SupportedLocale::Pt,
        SupportedLocale::Ru,
        SupportedLocale::Ar,
        SupportedLocale::Hi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::Ja => "ja",
            SupportedLocale::Es => "es",
            SupportedLocale::Fr => "fr",
            SupportedLocale::De => "de",
            SupportedLocale::ZhCn => "zh-CN",
            SupportedLocale::ZhTw => "zh-TW",
            SupportedLocale::Ko => "ko",
            SupportedLocale::It => "it",
            SupportedLocale::Pt => "pt",
            SupportedLocale::Ru => "ru",
            SupportedLocale::Ar => "ar",
            SupportedLocale::Hi => "hi",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SupportedLocale {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SupportedLocale {
    type Err = String;

    /// Exact, case-sensitive match on the identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| format!("Unknown locale identifier: {}", s))
    }
}

/// Where the runtime's preferred language tag comes from
pub trait LocaleSource: Send + Sync {
    /// The reported language tag, e.g. `ja-JP`, if any
    fn language_tag(&self) -> Option<String>;
}

/// Reads the POSIX locale variables in precedence order:
/// `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocaleSource;

const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

impl LocaleSource for EnvLocaleSource {
    fn language_tag(&self) -> Option<String> {
        LOCALE_VARS.iter().find_map(|var| {
            std::env::var(var)
                .ok()
                .and_then(|value| normalize_posix_locale(&value))
        })
    }
}

/// Always reports the same tag
#[derive(Debug, Clone, Default)]
pub struct FixedLocaleSource(Option<String>);

impl FixedLocaleSource {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// A source with no tag at all
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocaleSource {
    fn language_tag(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Turn `ja_JP.UTF-8@variant` (or a `LANGUAGE` list like `ja:en`) into `ja-JP`.
///
/// Returns `None` for empty values and for the `C`/`POSIX` locales, which carry
/// no language preference.
pub fn normalize_posix_locale(raw: &str) -> Option<String> {
    let first = raw.split(':').next()?.trim();
    let without_modifier = first.split('@').next()?;
    let without_encoding = without_modifier.split('.').next()?;

    if without_encoding.is_empty() || without_encoding == "C" || without_encoding == "POSIX" {
        return None;
    }

    Some(without_encoding.replace('_', "-"))
}
