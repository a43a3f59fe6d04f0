//! Command-line interface definition for godzilla
//!
//! Provides argument parsing for the wordlist generator.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::charset::NamedCharset;
use crate::error::GenError;

/// Flexible wordlist generator for penetration testing
///
/// Enumerate every word over a charset for a range of lengths, optionally
/// constrained by a positional pattern.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "godzilla",
    author = "m0h1nd4",
    version,
    about = "Flexible wordlist generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                              GODZILLA v1.0.0                                 ║
║                     Exhaustive Wordlist Generation                           ║
║                         For Penetration Testing                              ║
╚══════════════════════════════════════════════════════════════════════════════╝

Generate every word of MIN to MAX characters over a charset, shortest first,
in counting order. Words go to stdout unless an output file is given; the run
summary is always printed to stderr.

EXAMPLES:
    # All 4-digit PINs to the screen
    godzilla 4 4 -c numeric

    # Mixed-case alphanumerics of 3 to 5 characters into a file
    godzilla 3 5 -c alphanum-mixed -o words.txt

    # Custom charset
    godzilla 2 2 -s "abc123" -o custom.txt

    # 'Pass' followed by four digits
    godzilla 8 8 -s "Pass0123456789" -p "Pass,,,," -o patterned.txt

    # How big would it be?
    godzilla 1 8 -c alphanum --dry-run

PATTERN PLACEHOLDERS:
    @   lowercase letter from the charset
    ,   digit from the charset
    %   uppercase letter from the charset
    ^   any character from the charset
    Any other character is a literal and must be part of the charset.
    The pattern length must equal MIN. Words longer than MIN start with the
    pattern and continue with any charset characters.
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/godzilla",
    group(ArgGroup::new("charset_source").required(true).args(["charset", "string"]))
)]
pub struct Args {
    /// Minimum length of the words
    #[arg(value_name = "MIN")]
    pub min: usize,

    /// Maximum length of the words
    #[arg(value_name = "MAX")]
    pub max: usize,

    /// Use a predefined character set
    #[arg(short, long, value_enum, value_name = "NAME")]
    pub charset: Option<NamedCharset>,

    /// Use a custom character set (duplicates removed, sorted)
    #[arg(short, long, value_name = "CHARS")]
    pub string: Option<String>,

    /// Positional pattern: @ lower, ',' digit, % upper, ^ any, others literal
    #[arg(short, long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Buffer size for file output (e.g. "64KB", "8MB")
    #[arg(long, value_name = "SIZE", default_value = "8MB")]
    pub buffer_size: String,

    /// Dry run - report the number of words and output size without generating
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - no banner, header or progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> Result<usize, GenError> {
        parse_size(&self.buffer_size)
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> Result<usize, GenError> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| GenError::Argument(format!("invalid size format: '{}'", size_str)))?;

    match num.checked_mul(multiplier) {
        Some(0) => Err(GenError::Argument("buffer size must be greater than zero".to_string())),
        Some(bytes) => Ok(bytes),
        None => Err(GenError::Argument(format!("size too large: '{}'", size_str))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_charset() {
        let args = Args::try_parse_from(["godzilla", "4", "4", "-c", "numeric"]).unwrap();

        assert_eq!(args.min, 4);
        assert_eq!(args.max, 4);
        assert_eq!(args.charset, Some(NamedCharset::Numeric));
        assert!(args.string.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parse_custom_charset_with_pattern() {
        let args = Args::try_parse_from([
            "godzilla", "6", "6", "-s", "user0123456789", "-p", "user,,", "-o", "out.txt",
        ])
        .unwrap();

        assert_eq!(args.string.as_deref(), Some("user0123456789"));
        assert_eq!(args.pattern.as_deref(), Some("user,,"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_hyphenated_charset_names() {
        let args = Args::try_parse_from(["godzilla", "1", "2", "--charset", "alphanum-mixed"]).unwrap();
        assert_eq!(args.charset, Some(NamedCharset::AlphanumMixed));
    }

    #[test]
    fn test_charset_sources_are_exclusive() {
        let err = Args::try_parse_from(["godzilla", "1", "2", "-c", "alpha", "-s", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_charset_source_required() {
        let err = Args::try_parse_from(["godzilla", "1", "2"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_charset_name() {
        assert!(Args::try_parse_from(["godzilla", "1", "2", "-c", "hex"]).is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64MB").unwrap(), 64 * 1024 * 1024);
        assert_eq!(parse_size("1024KB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("512").unwrap(), 512);
        assert!(matches!(parse_size("lots"), Err(GenError::Argument(_))));
        assert!(matches!(parse_size("0KB"), Err(GenError::Argument(_))));
    }
}
