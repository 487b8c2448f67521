use super::Strings;

impl Strings {
    /// Determine whether a string starts with the given substring.
    ///
    /// With `case_sensitive` off, both sides are compared ASCII-lowercased.
    pub fn starts_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
        let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
        if needle.len() > haystack.len() {
            return false;
        }

        compare(&haystack[..needle.len()], needle, case_sensitive)
    }

    /// Determine whether a string ends with the given substring.
    ///
    /// With `case_sensitive` off, both sides are compared ASCII-lowercased.
    pub fn ends_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
        let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
        if needle.len() > haystack.len() {
            return false;
        }

        compare(&haystack[haystack.len() - needle.len()..], needle, case_sensitive)
    }
}

fn compare(candidate: &[u8], needle: &[u8], case_sensitive: bool) -> bool {
    if case_sensitive {
        candidate == needle
    } else {
        candidate.eq_ignore_ascii_case(needle)
    }
}
