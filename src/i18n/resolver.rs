//! Multilingual text resolution.
//!
//! Text may carry several renderings of the same content, each wrapped in a
//! language segment:
//!
//! ```text
//! <lang lang="en">Hello</lang><span lang="fr">Bonjour</span>
//! ```
//!
//! Resolution keeps the inner content of the segments written in one
//! language and removes every other segment. The kept language is the
//! preferred one when the text has it, otherwise the language of the first
//! segment in document order.

use crate::i18n::{LanguageCode, LocaleProvider, ResolutionMetrics};
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Any language segment. Group 1 is the language code, group 2 the content.
///
/// The attribute must be preceded by whitespace so that `data-lang` or
/// `xml:lang` never stand in for the segment's own `lang` attribute.
static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?s)<(?:lang|span)\b[^>]*\slang="([a-zA-Z0-9_-]+)"[^>]*>(.*?)</(?:lang|span)>"#,
        )
        .unwrap()
    })
}

/// Outcome of resolving one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved text
    pub text: String,

    /// Language whose segments were kept, if the text had any segment
    pub selected_language: Option<String>,

    /// Whether the preferred language was missing and the first available
    /// language was used instead
    pub fallback_used: bool,

    /// Number of language segments found in the input
    pub segments_found: usize,
}

/// Resolver for multilingual `<lang>`/`<span>` markup.
pub struct LanguageBlockResolver;

impl LanguageBlockResolver {
    /// Resolve `text` to a single language.
    ///
    /// Never fails: text without segments, including malformed or
    /// unterminated markers, is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use multilang_text::i18n::LanguageBlockResolver;
    ///
    /// let text = r#"<lang lang="en">Hello</lang><lang lang="fr">Bonjour</lang>"#;
    /// assert_eq!(LanguageBlockResolver::resolve(text, "fr"), "Bonjour");
    /// assert_eq!(LanguageBlockResolver::resolve(text, "de"), "Hello");
    /// ```
    pub fn resolve(text: &str, preferred_language: &str) -> String {
        Self::resolve_detailed(text, preferred_language).text
    }

    /// Resolve `text` and report which language was selected and why.
    ///
    /// Segments are found once; selection and substitution both work from
    /// that single segmentation, so a code that only appears inside another
    /// segment's content is never selected.
    pub fn resolve_detailed(text: &str, preferred_language: &str) -> Resolution {
        let codes: Vec<&str> = segment_regex()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        let Some(first) = codes.first().copied() else {
            return Resolution {
                text: text.to_string(),
                selected_language: None,
                fallback_used: false,
                segments_found: 0,
            };
        };

        let fallback_used = !codes.iter().any(|code| *code == preferred_language);
        let selected = if fallback_used {
            debug!(
                "Preferred language {:?} not present, falling back to {}",
                preferred_language, first
            );
            first
        } else {
            preferred_language
        };

        let resolved = segment_regex()
            .replace_all(text, |caps: &Captures| {
                if &caps[1] == selected {
                    caps[2].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();

        Resolution {
            text: resolved,
            selected_language: Some(selected.to_string()),
            fallback_used,
            segments_found: codes.len(),
        }
    }

    /// Distinct segment languages, in order of first appearance.
    pub fn available_languages(text: &str) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for caps in segment_regex().captures_iter(text) {
            let code = &caps[1];
            if !languages.iter().any(|known| known == code) {
                languages.push(code.to_string());
            }
        }
        languages
    }

    /// Resolve `text` using the current language reported by `provider`.
    ///
    /// The provider is read once, before matching. If it fails,
    /// `default_language` is used in its place.
    pub async fn resolve_current<P>(
        text: &str,
        provider: &P,
        default_language: &LanguageCode,
    ) -> Resolution
    where
        P: LocaleProvider,
    {
        let language = Self::current_or_default(provider, default_language).await;
        Self::resolve_recorded(text, language.as_str())
    }

    /// Resolve a batch of texts against a single read of the current language.
    pub async fn resolve_all<P, S>(
        texts: &[S],
        provider: &P,
        default_language: &LanguageCode,
    ) -> Vec<Resolution>
    where
        P: LocaleProvider,
        S: AsRef<str>,
    {
        let language = Self::current_or_default(provider, default_language).await;
        texts
            .iter()
            .map(|text| Self::resolve_recorded(text.as_ref(), language.as_str()))
            .collect()
    }

    async fn current_or_default<P>(provider: &P, default_language: &LanguageCode) -> LanguageCode
    where
        P: LocaleProvider,
    {
        match provider.current_language().await {
            Ok(language) => language,
            Err(e) => {
                warn!(
                    "Failed to read current language ({}), using default {}",
                    e, default_language
                );
                ResolutionMetrics::global().record_locale_failure();
                default_language.clone()
            }
        }
    }

    fn resolve_recorded(text: &str, language: &str) -> Resolution {
        let resolution = Self::resolve_detailed(text, language);

        let metrics = ResolutionMetrics::global();
        metrics.record_resolution();
        if resolution.segments_found == 0 {
            metrics.record_passthrough();
        } else if resolution.fallback_used {
            metrics.record_fallback();
        }

        resolution
    }
}
