use tracing::debug;

use super::Strings;

/// One literal match of a search string within a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// The matched text
    pub text: &'a str,
    /// Byte offset of the match within the subject
    pub offset: usize,
}

impl Occurrence<'_> {
    /// Byte offset just past the match
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl Strings {
    /// Find the non-overlapping literal occurrences of `search` in `subject`,
    /// left to right. An empty search string never matches.
    pub fn occurrences<'a>(subject: &'a str, search: &str) -> Vec<Occurrence<'a>> {
        if search.is_empty() {
            return Vec::new();
        }

        subject
            .match_indices(search)
            .map(|(offset, text)| Occurrence { text, offset })
            .collect()
    }

    /// Replace the nth (0-based) occurrence of `search` in `subject`.
    ///
    /// The subject comes back untouched unless it holds more than `nth`
    /// occurrences.
    pub fn replace_nth(search: &str, replace: &str, subject: &str, nth: usize) -> String {
        let found = Self::occurrences(subject, search);

        match found.get(nth) {
            Some(occurrence) => {
                let mut result = String::with_capacity(subject.len() + replace.len());
                result.push_str(&subject[..occurrence.offset]);
                result.push_str(replace);
                result.push_str(&subject[occurrence.end()..]);
                result
            }
            None => {
                debug!(
                    "replace_nth: {} occurrence(s) of {:?}, index {} out of range",
                    found.len(),
                    search,
                    nth
                );
                subject.to_string()
            }
        }
    }

    /// Replace every occurrence of `search` after the first.
    ///
    /// Nothing is replaced unless the subject holds at least three
    /// occurrences.
    pub fn replace_all_but_first_occurrence(search: &str, replace: &str, subject: &str) -> String {
        let found = Self::occurrences(subject, search);
        let occurrences = found.len().saturating_sub(1);

        if occurrences > 1 {
            let split = found[0].end();
            let (head, tail) = subject.split_at(split);
            return format!("{}{}", head, tail.replace(search, replace));
        }

        debug!(
            "replace_all_but_first_occurrence: only {} occurrence(s) of {:?}, leaving subject as is",
            found.len(),
            search
        );
        subject.to_string()
    }
}
