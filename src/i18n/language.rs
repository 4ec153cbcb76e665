//! Language code type: validated, owned language identifier.
//!
//! Codes are opaque tokens made of ASCII letters, digits, underscores and
//! hyphens (e.g. "en", "pt_br", "zh-hans"). They are compared as exact
//! strings; "en" and "en-us" are different languages.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when validating a language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,

    #[error("invalid character {found:?} in language code '{code}'")]
    InvalidCharacter { code: String, found: char },
}

/// A validated language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a LanguageCode from a string.
    ///
    /// # Arguments
    /// * `code` - The raw language code (e.g., "en", "pt_br")
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code is non-empty and well-formed
    /// * `Err` if the code is empty or contains a disallowed character
    ///
    /// # Example
    /// ```
    /// use multilang_text::i18n::LanguageCode;
    ///
    /// let french = LanguageCode::parse("fr").unwrap();
    /// assert_eq!(french.as_str(), "fr");
    /// assert!(LanguageCode::parse("fr FR").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self, LanguageCodeError> {
        if code.is_empty() {
            return Err(LanguageCodeError::Empty);
        }

        if let Some(found) = code.chars().find(|c| !is_code_char(*c)) {
            return Err(LanguageCodeError::InvalidCharacter {
                code: code.to_string(),
                found,
            });
        }

        Ok(Self(code.to_string()))
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the code, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Characters allowed in a language code
fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
