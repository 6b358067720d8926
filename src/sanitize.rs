//! Text normalization ahead of PDF serialization.
//!
//! The writer path only guarantees characters that fit a single-byte encoding,
//! so typographic punctuation is rewritten to its ASCII equivalent before any
//! string reaches an element.  The substitution table is an explicit value so
//! it can be unit-tested and extended without touching the renderer.

use crate::error::RenderError;

/// Immutable table of character substitutions applied before rendering.
#[derive(Clone, Copy, Debug)]
pub struct SubstitutionTable {
    entries: &'static [(char, char)],
}

/// Dash and curly-quote replacements that keep text inside the encodable range.
pub const DEFAULT_SUBSTITUTIONS: SubstitutionTable = SubstitutionTable {
    entries: &[
        ('\u{2013}', '-'),  // en-dash
        ('\u{2014}', '-'),  // em-dash
        ('\u{201C}', '"'),  // left double quotation mark
        ('\u{201D}', '"'),  // right double quotation mark
        ('\u{2018}', '\''), // left single quotation mark
        ('\u{2019}', '\''), // right single quotation mark
    ],
};

impl Default for SubstitutionTable {
    fn default() -> Self {
        DEFAULT_SUBSTITUTIONS
    }
}

impl SubstitutionTable {
    /// Returns the replacement for `ch`, if the table contains one.
    pub fn replacement(&self, ch: char) -> Option<char> {
        self.entries
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
    }

    /// Rewrites every tabled character in `text`.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.replacement(ch).unwrap_or(ch))
            .collect()
    }
}

/// Verifies that every character of `text` fits the single-byte range the
/// writer can encode.
///
/// Sanitized text is expected to always pass; a failure here means the
/// substitution table is missing an entry for a character the caller used.
pub fn ensure_encodable(text: &str) -> Result<(), RenderError> {
    match text.char_indices().find(|(_, ch)| *ch as u32 > 0xFF) {
        Some((index, character)) => Err(RenderError::Encoding { character, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_hyphen_minus() {
        let table = SubstitutionTable::default();
        assert_eq!(table.apply("a \u{2013} b \u{2014} c"), "a - b - c");
    }

    #[test]
    fn curly_quotes_become_straight() {
        let table = SubstitutionTable::default();
        assert_eq!(
            table.apply("\u{201C}quoted\u{201D} and \u{2018}single\u{2019}"),
            "\"quoted\" and 'single'"
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let table = SubstitutionTable::default();
        let once = table.apply("\u{2014}dash \u{201C}quote\u{201D}");
        assert_eq!(table.apply(&once), once);
    }

    #[test]
    fn sanitized_typographic_text_is_encodable() {
        let table = SubstitutionTable::default();
        let cleaned = table.apply("threat \u{2013} \u{201C}malware\u{201D}");
        assert!(ensure_encodable(&cleaned).is_ok());
    }

    #[test]
    fn untabled_unicode_is_rejected() {
        let err = ensure_encodable("skull \u{2620}").unwrap_err();
        match err {
            RenderError::Encoding { character, index } => {
                assert_eq!(character, '\u{2620}');
                assert_eq!(index, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn latin1_text_passes() {
        assert!(ensure_encodable("plain ASCII and caf\u{E9}").is_ok());
    }
}
