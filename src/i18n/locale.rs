//! Locale providers: where the "current language" comes from.
//!
//! The resolver itself never looks the current language up; callers either
//! pass it explicitly or hand a `LocaleProvider` to
//! `LanguageBlockResolver::resolve_current`, which reads it exactly once
//! per invocation.

use crate::i18n::{LanguageCode, LanguageCodeError};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// Errors raised when the current language cannot be determined.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale variable {0} is not set")]
    NotSet(String),

    #[error("locale value '{value}' is not a valid language code")]
    Invalid {
        value: String,
        #[source]
        source: LanguageCodeError,
    },

    #[error("no current language has been set")]
    Unavailable,
}

/// Source of the user's active language preference.
pub trait LocaleProvider {
    /// Read the current language.
    ///
    /// Returns the value effective at the time of the read; there is no
    /// ordering guarantee relative to concurrent writers.
    fn current_language(&self) -> impl Future<Output = Result<LanguageCode, LocaleError>> + Send;
}

/// A pre-fetched language, for callers that already know it.
#[derive(Debug, Clone)]
pub struct FixedLocale(LanguageCode);

impl FixedLocale {
    pub fn new(code: LanguageCode) -> Self {
        Self(code)
    }
}

impl LocaleProvider for FixedLocale {
    async fn current_language(&self) -> Result<LanguageCode, LocaleError> {
        Ok(self.0.clone())
    }
}

/// Reads a POSIX-style locale environment variable such as `LANG`.
///
/// Values like `fr_FR.UTF-8` or `de_DE@euro` are reduced to `fr_fr` and
/// `de_de`: the encoding and modifier suffixes are dropped and the result
/// is lowercased.
#[derive(Debug, Clone)]
pub struct EnvLocale {
    var: String,
}

impl EnvLocale {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this provider reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl LocaleProvider for EnvLocale {
    async fn current_language(&self) -> Result<LanguageCode, LocaleError> {
        let raw = std::env::var(&self.var).map_err(|_| LocaleError::NotSet(self.var.clone()))?;
        let normalized = normalize_posix_locale(&raw);
        debug!("Locale variable {}={:?} -> {:?}", self.var, raw, normalized);

        LanguageCode::parse(&normalized).map_err(|source| LocaleError::Invalid {
            value: raw,
            source,
        })
    }
}

/// Strip encoding/modifier suffixes and lowercase a POSIX locale name
fn normalize_posix_locale(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(['.', '@']).unwrap_or(trimmed.len());
    trimmed[..end].to_lowercase()
}

/// Process-wide, session-scoped current language.
///
/// Clones share the same underlying state, so a handle can be given to
/// every component that needs to read or change the active language.
#[derive(Debug, Clone, Default)]
pub struct SharedLocale {
    current: Arc<RwLock<Option<LanguageCode>>>,
}

impl SharedLocale {
    /// Create a shared locale with no language set yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared locale with an initial language.
    pub fn with_language(code: LanguageCode) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(code))),
        }
    }

    /// Change the active language for all holders of this handle.
    pub async fn set(&self, code: LanguageCode) {
        debug!("Current language changed to {}", code);
        *self.current.write().await = Some(code);
    }

    /// Clear the active language.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

impl LocaleProvider for SharedLocale {
    async fn current_language(&self) -> Result<LanguageCode, LocaleError> {
        self.current
            .read()
            .await
            .clone()
            .ok_or(LocaleError::Unavailable)
    }
}
