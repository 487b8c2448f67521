use super::{Strings, DEFAULT_LIST_SEPARATOR};

impl Strings {
    /// Join items into a natural-language list, e.g. "one, two and three"
    pub fn inline_list<S: AsRef<str>>(items: &[S]) -> String {
        Self::inline_list_with(items, DEFAULT_LIST_SEPARATOR)
    }

    /// Join items into a natural-language list with a custom final separator,
    /// e.g. "one, two or three"
    pub fn inline_list_with<S: AsRef<str>>(items: &[S], final_separator: &str) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
                format!("{} {} {}", head.join(", "), final_separator, last.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_list() {
        let empty: [&str; 0] = [];
        assert_eq!(Strings::inline_list(&empty), "");
        assert_eq!(Strings::inline_list(&["one"]), "one");
        assert_eq!(Strings::inline_list(&["one", "two"]), "one and two");
        assert_eq!(Strings::inline_list(&["one", "two", "three"]), "one, two and three");
        assert_eq!(
            Strings::inline_list(&["one", "two", "three", "four"]),
            "one, two, three and four"
        );
    }

    #[test]
    fn test_inline_list_with_separator() {
        assert_eq!(
            Strings::inline_list_with(&["one", "two", "three", "four"], "or"),
            "one, two, three or four"
        );
        assert_eq!(Strings::inline_list_with(&["yes", "no"], "or"), "yes or no");
    }

    #[test]
    fn test_inline_list_owned_items() {
        let items = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        assert_eq!(Strings::inline_list(&items), "red, green and blue");
    }
}
