//! String Utilities - miscellaneous string helpers
//!
//! This library provides:
//! - Punctuation stripping and whitespace normalization
//! - Nth-occurrence and all-but-first occurrence replacement
//! - Random hexadecimal strings
//! - Case-sensitive and case-insensitive prefix/suffix checks
//! - Word and character based excerpts
//! - Character-class extraction and inline list formatting

pub mod config;
pub mod error;
pub mod logging;
pub mod strings;

// Re-export main types for convenience
pub use crate::config::TextConfig;
pub use crate::error::{TextError, TextResult};
pub use crate::strings::{Occurrence, Strings};
