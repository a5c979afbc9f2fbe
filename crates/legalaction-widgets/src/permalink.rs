//! Permalink Parsing
//!
//! Fragments of the form `#<prefix><pk>`, e.g. `#klage-detail-12`.

use regex::Regex;

use crate::error::{Result, WidgetError};

/// Fragment part of an href or hash, without the `#`.
/// Input without a `#` is taken to be a bare fragment.
pub fn fragment_of(href: &str) -> &str {
    href.split_once('#').map_or(href, |(_, fragment)| fragment)
}

/// Extracts primary keys from permalink fragments
#[derive(Debug, Clone)]
pub struct PermalinkParser {
    pattern: Regex,
}

impl PermalinkParser {
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"{}(\d+)", regex::escape(prefix))).map_err(|source| {
            WidgetError::InvalidPermalinkPrefix {
                prefix: prefix.to_string(),
                source,
            }
        })?;
        Ok(Self { pattern })
    }

    /// First primary key found in the fragment of `hash_or_href`
    pub fn parse(&self, hash_or_href: &str) -> Option<u32> {
        let captures = self.pattern.captures(fragment_of(hash_or_href))?;
        captures.get(1)?.as_str().parse().ok()
    }
}
