use super::Strings;

impl Strings {
    /// Get the characters that pass a truth test, in order, duplicates kept
    pub fn characters<F>(s: &str, check: F) -> Vec<char>
    where
        F: Fn(&char) -> bool,
    {
        s.chars().filter(check).collect()
    }

    /// Get the lowercase (`a`-`z`) characters from a string
    pub fn lowercase_characters(s: &str) -> Vec<char> {
        Self::characters(s, char::is_ascii_lowercase)
    }

    /// Get the uppercase (`A`-`Z`) characters from a string
    pub fn uppercase_characters(s: &str) -> Vec<char> {
        Self::characters(s, char::is_ascii_uppercase)
    }

    /// Get the digits (`0`-`9`) from a string, as characters
    pub fn digits(s: &str) -> Vec<char> {
        Self::characters(s, char::is_ascii_digit)
    }

    /// Get the digits from a string as numeric values
    pub fn digit_values(s: &str) -> Vec<u32> {
        Self::digits(s)
            .into_iter()
            .filter_map(|c| c.to_digit(10))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "dhFs87ewBhg76i89";

    #[test]
    fn test_lowercase_characters() {
        assert_eq!(
            Strings::lowercase_characters(MIXED),
            vec!['d', 'h', 's', 'e', 'w', 'h', 'g', 'i']
        );
    }

    #[test]
    fn test_uppercase_characters() {
        assert_eq!(Strings::uppercase_characters(MIXED), vec!['F', 'B']);
    }

    #[test]
    fn test_digits() {
        assert_eq!(Strings::digits(MIXED), vec!['8', '7', '7', '6', '8', '9']);
        assert_eq!(Strings::digit_values(MIXED), vec![8, 7, 7, 6, 8, 9]);
    }

    #[test]
    fn test_ascii_classes_only() {
        assert!(Strings::lowercase_characters("éß").is_empty());
        assert!(Strings::uppercase_characters("ÉÀ").is_empty());
        assert!(Strings::digits("٣").is_empty());
        assert!(Strings::digits("").is_empty());
    }

    #[test]
    fn test_custom_predicate() {
        let vowels = Strings::characters("Programming in Rust", |c| "aeiouAEIOU".contains(*c));
        assert_eq!(vowels, vec!['o', 'a', 'i', 'i', 'u']);
    }
}
