//! Core generation driver
//!
//! Assembles a validated [`GenerationConfig`] and pulls words from the
//! generator into the sink, one at a time, while the report keeps count.

use bytesize::ByteSize;
use colored::*;
use indicatif::ProgressBar;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::charset::Charset;
use crate::cli::Args;
use crate::error::{ConfigError, GenError};
use crate::generator::{total_bytes, total_words, LengthRange, WordGenerator, WordLayout};
use crate::output::{OutputTarget, WordSink, DEFAULT_BUFFER_SIZE};
use crate::pattern::Pattern;
use crate::progress::{
    create_progress_bar, create_spinner, format_count, print_bullet, print_header, print_info,
    RunReport, RunStatus, RunSummary,
};

/// Words between progress bar updates
const PROGRESS_STEP: u64 = 10_000;

/// Validated, immutable description of one generation run
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub lengths: LengthRange,
    pub charset: Charset,
    pub pattern: Option<Pattern>,
    pub output: OutputTarget,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    layout: WordLayout,
}

impl GenerationConfig {
    /// Validate the generation parameters and resolve the pattern.
    ///
    /// The pattern length must equal `min`, so every generated length carries
    /// the full pattern as its prefix. Every literal must be in the charset
    /// and every placeholder must have at least one candidate character.
    pub fn new(
        min: usize,
        max: usize,
        charset: Charset,
        pattern: Option<&str>,
        output: OutputTarget,
    ) -> Result<Self, ConfigError> {
        if charset.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        let lengths = LengthRange::new(min, max)?;

        let pattern = pattern.map(Pattern::parse);
        let layout = match pattern {
            Some(ref pattern) => {
                if pattern.len() != lengths.min() {
                    return Err(ConfigError::PatternLength {
                        len: pattern.len(),
                        min,
                        max,
                    });
                }
                WordLayout::new(pattern.resolve(&charset)?, &charset)
            }
            None => WordLayout::unconstrained(&charset),
        };

        Ok(Self {
            lengths,
            charset,
            pattern,
            output,
            buffer_size: DEFAULT_BUFFER_SIZE,
            dry_run: false,
            quiet: false,
            layout,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, GenError> {
        let charset = match (args.charset, args.string.as_deref()) {
            (Some(named), None) => Charset::named(named),
            (None, Some(custom)) => Charset::custom(custom)?,
            _ => {
                return Err(GenError::Argument(
                    "exactly one of --charset or --string must be given".to_string(),
                ))
            }
        };

        let mut config = Self::new(
            args.min,
            args.max,
            charset,
            args.pattern.as_deref(),
            OutputTarget::from_path(args.output.clone()),
        )?;
        config.buffer_size = args.parse_buffer_size()?;
        config.dry_run = args.dry_run;
        config.quiet = args.quiet;

        Ok(config)
    }

    /// Fresh lazy sequence over every word of this configuration
    pub fn words(&self) -> WordGenerator {
        WordGenerator::new(self.layout.clone(), self.lengths)
    }

    /// Total number of words, `None` if it does not fit in a `u128`
    pub fn total_words(&self) -> Option<u128> {
        total_words(&self.layout, self.lengths)
    }

    /// Upper bound on the output size in bytes
    pub fn total_bytes(&self) -> Option<u128> {
        total_bytes(&self.layout, self.lengths)
    }
}

/// Main processor
pub struct Processor {
    config: GenerationConfig,
    interrupted: Arc<AtomicBool>,
}

impl Processor {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops generation when set, e.g. from a Ctrl-C handler
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the configured generation, returning the run summary.
    ///
    /// The summary is printed for completed, interrupted and failed runs
    /// alike; a write failure is returned after the summary.
    pub fn run(&self) -> Result<RunSummary, GenError> {
        if !self.config.quiet {
            self.print_run_header();
        }

        let mut report = RunReport::start();
        let mut bytes = 0;
        let outcome = WordSink::open(&self.config.output, self.config.buffer_size).and_then(|mut sink| {
            log::debug!("Writing words to {}", sink.label());
            let pb = self.progress_bar();
            let status = self.generate_into(&mut sink, &mut report, &pb);
            pb.finish_and_clear();
            bytes = sink.bytes_written();
            // dropping the sink flushes and closes the file on every path
            status.and_then(|status| sink.flush().map(|_| status))
        });

        let status = outcome.as_ref().map_or(RunStatus::Failed, |status| *status);
        let summary = report.finish(status, bytes);
        summary.print(self.config.output.path());

        outcome.map(|_| summary)
    }

    /// Pull every word from a fresh generator into `sink`
    pub fn generate_into<W: Write>(
        &self,
        sink: &mut WordSink<W>,
        report: &mut RunReport,
        pb: &ProgressBar,
    ) -> Result<RunStatus, GenError> {
        let mut words = self.config.words();
        let mut current_len = None;

        while let Some(word) = words.next() {
            if self.interrupted.load(Ordering::Relaxed) {
                log::info!("Interrupted after {} words", report.words());
                return Ok(RunStatus::Interrupted);
            }

            sink.write_word(&word)?;
            report.add_word();

            if report.words() % PROGRESS_STEP == 0 {
                pb.inc(PROGRESS_STEP);
                if words.current_len() != current_len {
                    current_len = words.current_len();
                    if let Some(len) = current_len {
                        pb.set_message(format!("length {}", len));
                    }
                }
            }
        }

        Ok(RunStatus::Completed)
    }

    /// Report what a run would produce without generating anything
    pub fn dry_run_report(&self) {
        print_header("DRY RUN - No words will be generated");

        print_bullet(&format!("Words:       {}", format_count(self.config.total_words())));
        let size = match self.config.total_bytes() {
            Some(bytes) if bytes <= u64::MAX as u128 => ByteSize(bytes as u64).to_string(),
            _ => "too large to represent".to_string(),
        };
        print_bullet(&format!("Output size: {}", size));
        print_bullet(&format!("Output:      {}", self.config.output));
    }

    fn print_run_header(&self) {
        print_header("Configuration");

        print_info(&format!("Charset:      {}", self.config.charset));
        print_info(&format!(
            "Min length:   {}, Max length: {}",
            self.config.lengths.min(),
            self.config.lengths.max()
        ));
        if let Some(ref pattern) = self.config.pattern {
            print_info(&format!("Pattern:      {}", pattern));
        }
        if let Some(path) = self.config.output.path() {
            print_info(&format!("Output:       {}", path.display()));
        }
        print_info(&format!("Words:        {}", format_count(self.config.total_words())));
        eprintln!("  {}", "-".repeat(30).dimmed());
    }

    /// Progress is only drawn when words go to a file
    fn progress_bar(&self) -> ProgressBar {
        if self.config.quiet || self.config.output == OutputTarget::Console {
            return ProgressBar::hidden();
        }

        match self.config.total_words().and_then(|n| u64::try_from(n).ok()) {
            Some(total) => create_progress_bar(total, "Generating..."),
            None => create_spinner("Generating..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::NamedCharset;
    use crate::pattern::Slot;
    use clap::Parser;
    use tempfile::TempDir;

    fn custom(chars: &str) -> Charset {
        Charset::custom(chars).unwrap()
    }

    fn generate(config: GenerationConfig) -> (String, RunSummary) {
        let processor = Processor::new(config);
        let mut sink = WordSink::new(Vec::new(), "memory");
        let mut report = RunReport::start();

        let status = processor
            .generate_into(&mut sink, &mut report, &ProgressBar::hidden())
            .unwrap();
        let text = String::from_utf8(sink.get_ref().clone()).unwrap();
        let bytes = sink.bytes_written();
        (text, report.finish(status, bytes))
    }

    #[test]
    fn test_numeric_pins() {
        let config =
            GenerationConfig::new(4, 4, Charset::named(NamedCharset::Numeric), None, OutputTarget::Console).unwrap();
        assert_eq!(config.total_words(), Some(10_000));

        let (text, summary) = generate(config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(summary.words, 10_000);
        assert_eq!(summary.status, RunStatus::Completed);
        assert_eq!(lines.len(), 10_000);
        assert_eq!(lines[0], "0000");
        assert_eq!(lines[9_999], "9999");
        assert!(text.ends_with("9999\n"));
    }

    #[test]
    fn test_user_pattern() {
        let config = GenerationConfig::new(
            6,
            6,
            custom("user0123456789"),
            Some("user,,"),
            OutputTarget::Console,
        )
        .unwrap();

        let (text, summary) = generate(config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(summary.words, 100);
        let expected: Vec<String> = (0..100).map(|n| format!("user{:02}", n)).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_pattern_with_tail_positions() {
        let config = GenerationConfig::new(2, 4, custom("ab"), Some("b^"), OutputTarget::Console).unwrap();
        assert_eq!(config.total_words(), Some(2 + 4 + 8));

        let (text, _) = generate(config);
        assert!(text.lines().all(|w| w.starts_with('b') && (2..=4).contains(&w.len())));
        assert_eq!(text.lines().next(), Some("ba"));
    }

    #[test]
    fn test_validation_failures() {
        let numeric = || Charset::named(NamedCharset::Numeric);

        assert_eq!(
            GenerationConfig::new(0, 2, numeric(), None, OutputTarget::Console).unwrap_err(),
            ConfigError::ZeroLength { which: "minimum" }
        );
        assert_eq!(
            GenerationConfig::new(3, 2, numeric(), None, OutputTarget::Console).unwrap_err(),
            ConfigError::MinExceedsMax { min: 3, max: 2 }
        );
        assert_eq!(
            GenerationConfig::new(2, 3, numeric(), Some("1234"), OutputTarget::Console).unwrap_err(),
            ConfigError::PatternLength { len: 4, min: 2, max: 3 }
        );
        assert_eq!(
            GenerationConfig::new(3, 3, numeric(), Some("1"), OutputTarget::Console).unwrap_err(),
            ConfigError::PatternLength { len: 1, min: 3, max: 3 }
        );
        assert_eq!(
            GenerationConfig::new(2, 3, numeric(), Some("1^^"), OutputTarget::Console).unwrap_err(),
            ConfigError::PatternLength { len: 3, min: 2, max: 3 }
        );
        assert_eq!(
            GenerationConfig::new(2, 2, numeric(), Some("1a"), OutputTarget::Console).unwrap_err(),
            ConfigError::LiteralNotInCharset { ch: 'a', position: 1 }
        );
        assert_eq!(
            GenerationConfig::new(2, 2, numeric(), Some("%1"), OutputTarget::Console).unwrap_err(),
            ConfigError::EmptySlot { slot: Slot::Upper, position: 0 }
        );
    }

    #[test]
    fn test_from_args_empty_custom_charset() {
        let args = Args::try_parse_from(["godzilla", "1", "2", "-s", ""]).unwrap();
        let err = GenerationConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, GenError::Configuration(ConfigError::EmptyCharset)));
    }

    #[test]
    fn test_interrupt_stops_generation() {
        let config =
            GenerationConfig::new(1, 3, Charset::named(NamedCharset::Alpha), None, OutputTarget::Console).unwrap();
        let processor = Processor::new(config);
        processor.interrupt_flag().store(true, Ordering::Relaxed);

        let mut sink = WordSink::new(Vec::new(), "memory");
        let mut report = RunReport::start();
        let status = processor
            .generate_into(&mut sink, &mut report, &ProgressBar::hidden())
            .unwrap();

        assert_eq!(status, RunStatus::Interrupted);
        assert_eq!(report.words(), 0);
    }

    #[test]
    fn test_run_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let mut config =
            GenerationConfig::new(3, 3, custom("ab$12"), None, OutputTarget::File(path.clone())).unwrap();
        config.quiet = true;

        let summary = Processor::new(config).run().unwrap();
        assert_eq!(summary.words, 125);
        assert_eq!(summary.bytes, 125 * 4);
        assert_eq!(summary.status, RunStatus::Completed);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 125);
        assert!(lines.iter().all(|w| w.len() == 3 && w.chars().all(|c| "ab$12".contains(c))));
    }

    #[test]
    fn test_run_interrupted_keeps_written_words_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.txt");

        // far too many words to ever finish
        let mut config = GenerationConfig::new(
            1,
            8,
            Charset::named(NamedCharset::AlphanumMixed),
            None,
            OutputTarget::File(path.clone()),
        )
        .unwrap();
        config.quiet = true;

        let processor = Processor::new(config);
        let interrupted = processor.interrupt_flag();
        let stopper = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            interrupted.store(true, Ordering::Relaxed);
        });

        let summary = processor.run().unwrap();
        stopper.join().unwrap();

        assert_eq!(summary.status, RunStatus::Interrupted);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count() as u64, summary.words);
        assert_eq!(content.len() as u64, summary.bytes);
        if summary.words > 0 {
            assert!(content.starts_with("a\nb\n"));
            assert!(content.ends_with('\n'));
        }
    }

    #[test]
    fn test_run_unwritable_target_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = GenerationConfig::new(
            1,
            1,
            custom("a"),
            None,
            OutputTarget::File(temp_dir.path().join("no").join("such").join("dir.txt")),
        )
        .unwrap();
        config.quiet = true;

        let err = Processor::new(config).run().unwrap_err();
        assert!(matches!(err, GenError::Write { .. }));
    }
}
