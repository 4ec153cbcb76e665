//! Resolve multilingual markup from a file or stdin.
//!
//! Usage:
//!   multilang-text [FILE]                    # Resolve to the current language
//!   multilang-text --list-languages [FILE]   # Print the languages present
//!   multilang-text --metrics [FILE]          # Also print metrics (JSON) to stderr
//!
//! `--list-languages` needs no configuration and does not combine with
//! `--metrics`.
//!
//! Optional environment variables:
//! - MULTILANG_LANGUAGE (explicit current language)
//! - MULTILANG_LOCALE_VAR (defaults to LANG)
//! - MULTILANG_DEFAULT_LANGUAGE (defaults to en)

use anyhow::{bail, Result};
use multilang_text::config::Config;
use multilang_text::i18n::{LanguageBlockResolver, ResolutionMetrics};
use multilang_text::source;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the resolved text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multilang_text=info".parse()?),
        )
        .init();

    let options = CliOptions::parse(std::env::args().skip(1))?;
    let text = source::load_text(options.input.as_deref())?;

    if options.list_languages {
        for language in LanguageBlockResolver::available_languages(&text) {
            println!("{}", language);
        }
        return Ok(());
    }

    let config = Config::from_env()?;
    let provider = config.locale_provider();
    let resolution =
        LanguageBlockResolver::resolve_current(&text, &provider, &config.default_language).await;

    match (&resolution.selected_language, resolution.fallback_used) {
        (None, _) => info!("No language segments found, input unchanged"),
        (Some(language), true) => info!(
            "Current language not present, kept first available language {}",
            language
        ),
        (Some(language), false) => info!("Kept language {}", language),
    }

    print!("{}", resolution.text);

    if options.show_metrics {
        let report = ResolutionMetrics::global().report();
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Command-line options
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    list_languages: bool,
    show_metrics: bool,
    input: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_str() {
                "--list-languages" => options.list_languages = true,
                "--metrics" => options.show_metrics = true,
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                path => {
                    if options.input.is_some() {
                        bail!("Only one input file may be given");
                    }
                    options.input = Some(PathBuf::from(path));
                }
            }
        }

        if options.list_languages && options.show_metrics {
            bail!("--metrics cannot be combined with --list-languages");
        }

        Ok(options)
    }
}
