//! String manipulation helpers
//!
//! Everything hangs off the [`Strings`] namespace; each submodule adds one
//! family of associated functions. All operations are pure apart from
//! [`Strings::random_hex`], which draws from the thread-local RNG.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod affix;
pub mod characters;
pub mod excerpt;
pub mod list;
pub mod normalize;
pub mod random;
pub mod replace;

pub use replace::Occurrence;

/// Default number of words kept by [`Strings::excerpt`]
pub const DEFAULT_EXCERPT_WORDS: usize = 40;

/// Default number of characters kept by [`Strings::excerpt_characters`]
pub const DEFAULT_EXCERPT_CHARACTERS: usize = 100;

/// Marker appended to a shortened excerpt
pub const DEFAULT_MORE: &str = "...";

/// Default final separator used by [`Strings::inline_list`]
pub const DEFAULT_LIST_SEPARATOR: &str = "and";

/// Miscellaneous string utilities
pub struct Strings;

/// ASCII punctuation, i.e. POSIX `[:punct:]`
pub(crate) static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());

/// Runs of ASCII whitespace, i.e. POSIX `[:space:]`
pub(crate) static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:space:]]+").unwrap());

/// Markup tags, removed before excerpting. A `<` followed by whitespace is
/// plain text, not the start of a tag.
pub(crate) static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^[:space:]>][^>]*>").unwrap());

/// Words: alphanumeric runs, optionally joined by a single apostrophe or hyphen
pub(crate) static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:alnum:]]+(?:['-][[:alnum:]]+)*").unwrap());

/// A trailing partial word, with the whitespace in front of it
pub(crate) static TRAILING_PARTIAL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:space:]]+?(?:[^[:space:]]+)?$").unwrap());
