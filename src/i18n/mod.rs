//! Internationalization (i18n) module for multilingual text.
//!
//! # Architecture
//!
//! - `language`: Validated `LanguageCode` type
//! - `locale`: Providers for the user's current language
//! - `resolver`: Reduces `<lang>`/`<span lang>` markup to a single language
//! - `metrics`: Resolution observability and metrics
//!
//! # Example
//!
//! ```rust
//! use multilang_text::i18n::{FixedLocale, LanguageBlockResolver, LanguageCode};
//!
//! let text = r#"<span lang="en">Course</span><span lang="es">Curso</span>"#;
//!
//! // Pure form: the caller already knows the language
//! assert_eq!(LanguageBlockResolver::resolve(text, "es"), "Curso");
//!
//! // Provider form: the current language is read once per call
//! let provider = FixedLocale::new(LanguageCode::parse("es").unwrap());
//! let default = LanguageCode::parse("en").unwrap();
//! let resolution = tokio_test::block_on(LanguageBlockResolver::resolve_current(
//!     text, &provider, &default,
//! ));
//! assert_eq!(resolution.text, "Curso");
//! ```

mod language;
mod locale;
mod metrics;
mod resolver;

pub use language::{LanguageCode, LanguageCodeError};
pub use locale::{EnvLocale, FixedLocale, LocaleError, LocaleProvider, SharedLocale};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use resolver::{LanguageBlockResolver, Resolution};
