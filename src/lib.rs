//! # Godzilla
//!
//! Exhaustive wordlist generator for penetration testing.
//!
//! ## Features
//!
//! - **Charsets**: seven predefined sets or any custom string
//! - **Length ranges**: every length from min to max, shortest first
//! - **Patterns**: constrain leading positions to literals, lowercase letters,
//!   digits, uppercase letters or any charset character
//! - **Lazy generation**: words are produced one at a time in odometer order,
//!   memory stays bounded by the word length
//! - **Console or file output** with a run summary and progress bar
//!
//! ## Usage
//!
//! ```bash
//! # Every 4-digit PIN
//! godzilla 4 4 -c numeric
//!
//! # 'user' followed by two digits, into a file
//! godzilla 6 6 -s "user0123456789" -p "user,," -o users.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use godzilla::charset::{Charset, NamedCharset};
//! use godzilla::output::OutputTarget;
//! use godzilla::processor::GenerationConfig;
//!
//! let config = GenerationConfig::new(
//!     2,
//!     2,
//!     Charset::named(NamedCharset::Numeric),
//!     Some("1,"),
//!     OutputTarget::Console,
//! )
//! .unwrap();
//!
//! let words: Vec<String> = config.words().collect();
//! assert_eq!(words.len(), 10);
//! assert_eq!(words[0], "10");
//! ```

pub mod charset;
pub mod cli;
pub mod error;
pub mod generator;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::{ConfigError, GenError};
pub use processor::{GenerationConfig, Processor};
