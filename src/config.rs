use crate::i18n::{EnvLocale, FixedLocale, LanguageCode, LocaleError, LocaleProvider};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Language used when the current language cannot be read
    pub default_language: LanguageCode,

    /// Explicit current language, overriding the locale variable
    pub language: Option<LanguageCode>,

    /// Locale variable consulted when no explicit language is set
    pub locale_var: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = std::env::var("MULTILANG_DEFAULT_LANGUAGE")
            .unwrap_or_else(|_| "en".to_string());
        let default_language = LanguageCode::parse(&default_language)
            .with_context(|| format!("Invalid MULTILANG_DEFAULT_LANGUAGE '{}'", default_language))?;

        let language = match std::env::var("MULTILANG_LANGUAGE") {
            Ok(value) if !value.trim().is_empty() => Some(
                LanguageCode::parse(value.trim())
                    .with_context(|| format!("Invalid MULTILANG_LANGUAGE '{}'", value))?,
            ),
            _ => None,
        };

        Ok(Self {
            default_language,
            language,
            locale_var: std::env::var("MULTILANG_LOCALE_VAR").unwrap_or_else(|_| "LANG".to_string()),
        })
    }

    /// Build the locale provider this configuration describes
    pub fn locale_provider(&self) -> ConfiguredLocale {
        match &self.language {
            Some(language) => ConfiguredLocale::Fixed(FixedLocale::new(language.clone())),
            None => ConfiguredLocale::Env(EnvLocale::new(self.locale_var.clone())),
        }
    }
}

/// Locale provider selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredLocale {
    Fixed(FixedLocale),
    Env(EnvLocale),
}

impl LocaleProvider for ConfiguredLocale {
    async fn current_language(&self) -> Result<LanguageCode, LocaleError> {
        match self {
            ConfiguredLocale::Fixed(provider) => provider.current_language().await,
            ConfiguredLocale::Env(provider) => provider.current_language().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [
        "MULTILANG_DEFAULT_LANGUAGE",
        "MULTILANG_LANGUAGE",
        "MULTILANG_LOCALE_VAR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial(env)]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");

        assert_eq!(config.default_language, "en");
        assert!(config.language.is_none());
        assert_eq!(config.locale_var, "LANG");
    }

    #[test]
    #[serial(env)]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("MULTILANG_DEFAULT_LANGUAGE", "es");
        std::env::set_var("MULTILANG_LANGUAGE", "pt_br");
        std::env::set_var("MULTILANG_LOCALE_VAR", "LC_MESSAGES");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.default_language, "es");
        assert_eq!(config.language.as_ref().map(|l| l.as_str()), Some("pt_br"));
        assert_eq!(config.locale_var, "LC_MESSAGES");

        clear_env();
    }

    #[test]
    #[serial(env)]
    fn test_from_env_blank_language_ignored() {
        clear_env();
        std::env::set_var("MULTILANG_LANGUAGE", "  ");

        let config = Config::from_env().expect("Should load");
        assert!(config.language.is_none());

        clear_env();
    }

    #[test]
    #[serial(env)]
    fn test_from_env_invalid_default_language() {
        clear_env();
        std::env::set_var("MULTILANG_DEFAULT_LANGUAGE", "en US");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MULTILANG_DEFAULT_LANGUAGE"));

        clear_env();
    }

    #[test]
    #[serial(env)]
    fn test_from_env_invalid_language() {
        clear_env();
        std::env::set_var("MULTILANG_LANGUAGE", "fr\"");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MULTILANG_LANGUAGE"));

        clear_env();
    }

    #[tokio::test]
    #[serial(env)]
    async fn test_locale_provider_prefers_explicit_language() {
        clear_env();
        std::env::set_var("MULTILANG_LANGUAGE", "fr");
        std::env::set_var("MULTILANG_TEST_CONFIG_LOCALE", "de_DE.UTF-8");
        std::env::set_var("MULTILANG_LOCALE_VAR", "MULTILANG_TEST_CONFIG_LOCALE");

        let config = Config::from_env().unwrap();
        let language = config.locale_provider().current_language().await.unwrap();
        assert_eq!(language, "fr");

        clear_env();
        std::env::remove_var("MULTILANG_TEST_CONFIG_LOCALE");
    }

    #[tokio::test]
    #[serial(env)]
    async fn test_locale_provider_reads_locale_var() {
        clear_env();
        std::env::set_var("MULTILANG_TEST_CONFIG_LOCALE", "de_DE.UTF-8");
        std::env::set_var("MULTILANG_LOCALE_VAR", "MULTILANG_TEST_CONFIG_LOCALE");

        let config = Config::from_env().unwrap();
        let language = config.locale_provider().current_language().await.unwrap();
        assert_eq!(language, "de_de");

        clear_env();
        std::env::remove_var("MULTILANG_TEST_CONFIG_LOCALE");
    }
}
