use super::{Strings, PUNCTUATION, WHITESPACE_RUN};

impl Strings {
    /// Strip ASCII punctuation from a string
    pub fn strip_punctuation(s: &str) -> String {
        PUNCTUATION.replace_all(s, "").into_owned()
    }

    /// Collapse every run of whitespace into a single space.
    ///
    /// Leading and trailing runs are collapsed too, not trimmed. Pairs well
    /// with [`Strings::strip_punctuation`], which tends to leave double spaces.
    pub fn strip_multiple_spaces(s: &str) -> String {
        WHITESPACE_RUN.replace_all(s, " ").into_owned()
    }
}
