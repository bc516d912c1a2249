//! template/matcher.rs
//! Anchored structural matching of sentences against a template.
//!
//! Design notes:
//! - Slots are delimited by literal text, not fixed width, so words of any
//!   length are representable. Each slot captures one maximal run of
//!   non-whitespace characters (`\S+`).
//! - Literal fragments are regex-escaped and matched as exact text; fragments
//!   containing metacharacters are never interpreted as pattern syntax.
//! - The pattern is anchored at both ends: any leading or trailing characters
//!   make the whole match fail.
//! - Fragment design is a configuration responsibility: a fragment whose edge
//!   touches a slot with non-whitespace would merge with slot content, and the
//!   matcher does not try to detect that.

use regex::Regex;

use crate::template::types::{Template, TemplateError};

/// Compile the anchored pattern `^F[0](\S+)F[1](\S+)…F[n]$` with every
/// fragment escaped.
pub(crate) fn build_pattern(fragments: &[String]) -> Result<Regex, TemplateError> {
    let slot_count = fragments.len() - 1;

    let mut pattern = String::from("^");
    for fragment in &fragments[..slot_count] {
        pattern.push_str(&regex::escape(fragment));
        pattern.push_str(r"(\S+)");
    }
    pattern.push_str(&regex::escape(&fragments[slot_count]));
    pattern.push('$');

    Regex::new(&pattern).map_err(|e| TemplateError::Pattern(e.to_string()))
}

impl Template {
    /// Match `sentence` against this template's structure.
    ///
    /// Returns the captured slot tokens in slot order, or `None` when the
    /// sentence does not conform exactly.
    pub fn match_slots<'s>(&self, sentence: &'s str) -> Option<Vec<&'s str>> {
        let captures = self.pattern().captures(sentence)?;

        let mut words = Vec::with_capacity(self.slot_count());
        for i in 1..=self.slot_count() {
            // Every group is `(\S+)` and the pattern matched, so each capture
            // participates.
            words.push(captures.get(i)?.as_str());
        }
        Some(words)
    }
}
