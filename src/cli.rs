use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use string_utilities::config::{ConfigOverrides, LoggingConfig, TextConfig};
use string_utilities::logging::{init_logging, with_scoped_logging, OperationTimer};
use string_utilities::{Strings, TextResult};

#[derive(Parser)]
#[command(name = "strutil")]
#[command(about = "Miscellaneous string utilities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove ASCII punctuation
    StripPunctuation {
        text: String,
    },

    /// Collapse whitespace runs into single spaces
    StripSpaces {
        text: String,
    },

    /// Strip punctuation, then collapse whitespace
    Normalize {
        text: String,
    },

    /// Replace the nth (0-based) occurrence of a substring
    ReplaceNth {
        search: String,
        replace: String,
        subject: String,
        #[arg(help = "Zero-based occurrence index")]
        nth: usize,
    },

    /// Replace every occurrence after the first
    ReplaceAllButFirst {
        search: String,
        replace: String,
        subject: String,
    },

    /// Generate a random hexadecimal string
    RandomHex {
        length: usize,
        #[arg(short, long, help = "Upper-case the output")]
        uppercase: bool,
    },

    /// Check whether text starts with a prefix
    StartsWith {
        haystack: String,
        needle: String,
        #[arg(short, long, help = "Compare ignoring ASCII case")]
        ignore_case: bool,
    },

    /// Check whether text ends with a suffix
    EndsWith {
        haystack: String,
        needle: String,
        #[arg(short, long, help = "Compare ignoring ASCII case")]
        ignore_case: bool,
    },

    /// Shorten text to a number of words
    Excerpt {
        content: String,
        #[arg(short, long, help = "Number of words to keep")]
        length: Option<usize>,
        #[arg(short, long, help = "Text appended when shortened")]
        more: Option<String>,
    },

    /// Shorten text to a number of characters
    ExcerptChars {
        content: String,
        #[arg(short, long, help = "Number of characters to keep")]
        length: Option<usize>,
        #[arg(short, long, help = "Text appended when shortened")]
        more: Option<String>,
    },

    /// List the lowercase characters
    Lowercase {
        text: String,
    },

    /// List the uppercase characters
    Uppercase {
        text: String,
    },

    /// List the digits
    Digits {
        text: String,
    },

    /// Join items into a natural-language list
    List {
        items: Vec<String>,
        #[arg(short, long, help = "Final separator, e.g. \"or\"")]
        separator: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log configuration loading through a temporary subscriber
    let mut bootstrap = LoggingConfig::default();
    if cli.verbose {
        bootstrap.level = "debug".to_string();
    }
    let mut config = with_scoped_logging(&bootstrap, || load_config(cli.config.as_deref()))?;

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;

    debug!("strutil v{}", env!("CARGO_PKG_VERSION"));

    match execute(cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e)
        }
    }
}

/// Load configuration from `path` or the default location, then apply and
/// validate environment overrides
fn load_config(path: Option<&str>) -> TextResult<TextConfig> {
    let mut config = match path {
        Some(config_path) => TextConfig::load_from_file(config_path)?,
        None => TextConfig::load()?,
    };
    ConfigOverrides::apply(&mut config)?;
    Ok(config)
}

fn execute(command: Commands, config: &TextConfig) -> Result<String> {
    let output = match command {
        Commands::StripPunctuation { text } => timed("strip_punctuation", &text, |t| {
            Strings::strip_punctuation(t)
        }),
        Commands::StripSpaces { text } => timed("strip_multiple_spaces", &text, |t| {
            Strings::strip_multiple_spaces(t)
        }),
        Commands::Normalize { text } => timed("normalize", &text, |t| {
            Strings::strip_multiple_spaces(&Strings::strip_punctuation(t))
        }),
        Commands::ReplaceNth { search, replace, subject, nth } => {
            timed("replace_nth", &subject, |s| Strings::replace_nth(&search, &replace, s, nth))
        }
        Commands::ReplaceAllButFirst { search, replace, subject } => {
            timed("replace_all_but_first_occurrence", &subject, |s| {
                Strings::replace_all_but_first_occurrence(&search, &replace, s)
            })
        }
        Commands::RandomHex { length, uppercase } => {
            Strings::random_hex(length, uppercase || config.hex.uppercase)
        }
        Commands::StartsWith { haystack, needle, ignore_case } => {
            Strings::starts_with(&haystack, &needle, !ignore_case).to_string()
        }
        Commands::EndsWith { haystack, needle, ignore_case } => {
            Strings::ends_with(&haystack, &needle, !ignore_case).to_string()
        }
        Commands::Excerpt { content, length, more } => {
            let length = length.unwrap_or(config.excerpt.word_limit);
            let more = more.as_deref().unwrap_or(&config.excerpt.more);
            timed("excerpt", &content, |c| Strings::excerpt(c, length, more))
        }
        Commands::ExcerptChars { content, length, more } => {
            let length = length.unwrap_or(config.excerpt.character_limit);
            let more = more.as_deref().unwrap_or(&config.excerpt.more);
            timed("excerpt_characters", &content, |c| {
                Strings::excerpt_characters(c, length, more)
            })
        }
        Commands::Lowercase { text } => format_characters(&Strings::lowercase_characters(&text)),
        Commands::Uppercase { text } => format_characters(&Strings::uppercase_characters(&text)),
        Commands::Digits { text } => format_characters(&Strings::digits(&text)),
        Commands::List { items, separator } => match separator {
            Some(separator) => Strings::inline_list_with(&items, &separator),
            None => config.list.join(&items),
        },
    };

    Ok(output)
}

fn timed<F>(operation: &'static str, input: &str, f: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let timer = OperationTimer::new(operation, input.len());
    let output = f(input);
    timer.finish(output.len());
    output
}

fn format_characters(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("strutil").chain(args.iter().copied()))
            .unwrap();
        execute(cli.command, &TextConfig::default()).unwrap()
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("strutil.toml");
        std::fs::write(&path, "[list]\nfinal_separator = \"or\"\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.list.join(&["tea", "coffee"]), "tea or coffee");
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("strutil.toml");
        std::fs::write(&path, "[list]\nfinal_separator = \"\"\n").unwrap();

        let err = load_config(path.to_str()).unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_normalize_command() {
        assert_eq!(
            run(&["normalize", "This, is a sentence, with - some - punctuation."]),
            "This is a sentence with some punctuation"
        );
    }

    #[test]
    fn test_replace_commands() {
        assert_eq!(run(&["replace-nth", "0", "1", "0000000000", "5"]), "0000010000");
        assert_eq!(run(&["replace-all-but-first", "0", "1", "0000000000"]), "0111111111");
    }

    #[test]
    fn test_affix_commands() {
        assert_eq!(run(&["starts-with", "This is a test", "this"]), "false");
        assert_eq!(run(&["starts-with", "This is a test", "this", "--ignore-case"]), "true");
        assert_eq!(run(&["ends-with", "This is a Test", "Test"]), "true");
    }

    #[test]
    fn test_excerpt_commands() {
        let long = "This is a test, to see if the excerpt function works properly";
        assert_eq!(
            run(&["excerpt", long, "--length", "9"]),
            "This is a test, to see if the excerpt..."
        );
        assert_eq!(
            run(&["excerpt-chars", long, "-l", "42", "-m", "…"]),
            "This is a test, to see if the excerpt…"
        );
    }

    #[test]
    fn test_character_and_list_commands() {
        assert_eq!(run(&["uppercase", "dhFs87ewBhg76i89"]), "F B");
        assert_eq!(run(&["digits", "dhFs87ewBhg76i89"]), "8 7 7 6 8 9");
        assert_eq!(run(&["list", "one", "two", "three"]), "one, two and three");
        assert_eq!(run(&["list", "one", "two", "--separator", "or"]), "one or two");
    }

    #[test]
    fn test_random_hex_command() {
        let hex = run(&["random-hex", "8", "--uppercase"]);
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
