use tracing::debug;

use super::{Strings, MARKUP_TAG, TRAILING_PARTIAL_WORD, WORD};

impl Strings {
    /// Get an excerpt, by providing the required number of words.
    ///
    /// Markup tags are stripped and the result trimmed. When the text holds
    /// more than `length` words it is cut right after the last kept word and
    /// `more` is appended; otherwise the cleaned text is returned as is.
    pub fn excerpt(content: &str, length: usize, more: &str) -> String {
        let stripped = MARKUP_TAG.replace_all(content, "");
        let excerpt = stripped.trim();

        let mut words = WORD.find_iter(excerpt);
        let cut = match length {
            0 => words.next().map(|_| 0),
            _ => words
                .nth(length - 1)
                .and_then(|last| words.next().map(|_| last.end())),
        };

        match cut {
            Some(position) => {
                debug!("excerpt: truncating to {} word(s) at byte {}", length, position);
                format!("{}{}", &excerpt[..position], more)
            }
            _ => excerpt.to_string(),
        }
    }

    /// Get an excerpt, by providing the required number of characters.
    ///
    /// Content no longer than `length` characters is returned unchanged.
    /// Otherwise the text is cut to `length` characters, an incomplete final
    /// word is dropped and `more` is appended.
    pub fn excerpt_characters(content: &str, length: usize, more: &str) -> String {
        let cut = match content.char_indices().nth(length) {
            Some((position, _)) => position,
            None => return content.to_string(),
        };

        let truncated = TRAILING_PARTIAL_WORD.replace(&content[..cut], "");
        format!("{}{}", truncated, more)
    }
}
