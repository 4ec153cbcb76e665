//! Resolve multilingual `<lang>`/`<span lang>` markup to a single language,
//! plus small text helpers for the same kind of HTML-ish content.

pub mod config;
pub mod i18n;
pub mod source;
pub mod text;
