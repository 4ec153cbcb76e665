//! Text helpers for HTML-ish content: escaping, word counting, human
//! readable sizes and truncation.

use regex::Regex;
use std::sync::OnceLock;

static SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();
static BLOCK_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static SPLIT_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Units for `bytes_to_size`, in steps of 1024
const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Escape the characters that are significant in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Decode the entities produced by `escape_html`, plus `&nbsp;`.
pub fn decode_html(text: &str) -> String {
    // &amp; last so "&amp;lt;" decodes to "&lt;", not "<"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Count the words in an HTML fragment.
///
/// Scripts are dropped and tags removed; block-level tags count as word
/// boundaries, inline tags do not (`<b>un</b>usual` is one word).
/// Apostrophes, quotes and hyphens join words, and so do the separators
/// inside numbers (`1,000.50` is one word).
pub fn count_words(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let script = SCRIPT_REGEX.get_or_init(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
    let block = BLOCK_TAG_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)</?(?:p|div|br|hr|h[1-6]|li|ul|ol|dl|dt|dd|tr|td|th|table|blockquote|pre|section|article)\b[^>]*>",
        )
        .unwrap()
    });
    let tag = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    let split_number = SPLIT_NUMBER_REGEX.get_or_init(|| Regex::new(r"([0-9])[.,]([0-9])").unwrap());

    let text = script.replace_all(text, "");
    let text = block.replace_all(&text, " ");
    let text = tag.replace_all(&text, "");
    let text = decode_html(&text).replace('_', " ");

    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '’' | '-'))
        .collect();

    // Applied twice so that overlapping runs like "1.000.000" are fully joined
    let text = split_number.replace_all(&text, "${1}${2}");
    let text = split_number.replace_all(&text, "${1}${2}");

    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .count()
}

/// Format a byte count with binary units, e.g. `1536` -> `"1.5 KB"`.
///
/// The value is rounded to `precision` decimals and trailing zeros are
/// dropped. Sizes beyond the largest unit stay in that unit.
pub fn bytes_to_size(bytes: u64, precision: usize) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut formatted = format!("{:.*}", precision, value);

    // Rounding can carry up to the next unit, e.g. 1023.999 KB -> "1024.00"
    let carried = formatted.parse::<f64>().map_or(false, |v| v >= 1024.0);
    if carried && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
        formatted = format!("{:.*}", precision, value);
    }

    let formatted = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    };

    format!("{} {}", formatted, SIZE_UNITS[unit])
}

/// Shorten `text` to at most `length` characters plus an ellipsis.
///
/// The cut moves back to the last space when there is one, so words are
/// not split. The ellipsis is the `&hellip;` entity since the result is
/// meant to be rendered as HTML.
pub fn shorten_text(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let cut: String = text.chars().take(length).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };

    format!("{}&hellip;", cut)
}
