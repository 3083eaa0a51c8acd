//! Leading `---` metadata block extraction.
//!
//! Only flat `key: value` lines are understood. Everything stays a string.

use crate::types::FrontMatter;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a fenced block anchored at the very start of the document.
static FRONTMATTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").unwrap());

/// Extract front matter from a document.
///
/// Returns an empty mapping when the document does not open with a fence.
pub fn extract_frontmatter(content: &str) -> FrontMatter {
    let mut frontmatter = FrontMatter::new();

    let Some(body) = FRONTMATTER_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
    else {
        return frontmatter;
    };

    for line in body.as_str().split('\n') {
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim().to_string(), strip_quotes(value.trim()).to_string());
        }
    }

    log::debug!("Front matter: {} key(s)", frontmatter.len());
    frontmatter
}

/// Remove one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
