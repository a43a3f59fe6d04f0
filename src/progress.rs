//! Progress display module
//!
//! Styled console messages, the progress bar and the end-of-run report.
//! Everything here writes to stderr; stdout is reserved for generated words.

use bytesize::ByteSize;
use chrono::{DateTime, Local};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║   ██████╗  ██████╗ ██████╗ ███████╗██╗██╗     ██╗      █████╗    ║
║  ██╔════╝ ██╔═══██╗██╔══██╗╚══███╔╝██║██║     ██║     ██╔══██╗   ║
║  ██║  ███╗██║   ██║██║  ██║  ███╔╝ ██║██║     ██║     ███████║   ║
║  ██║   ██║██║   ██║██║  ██║ ███╔╝  ██║██║     ██║     ██╔══██║   ║
║  ╚██████╔╝╚██████╔╝██████╔╝███████╗██║███████╗███████╗██║  ██║   ║
║   ╚═════╝  ╚═════╝ ╚═════╝ ╚══════╝╚═╝╚══════╝╚══════╝╚═╝  ╚═╝   ║
║                  Wordlist Generator  v1.0.0                      ║
╚══════════════════════════════════════════════════════════════════╝
"#;

    eprintln!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    eprintln!("  {} {}", "•".green(), text);
}

/// Create a styled progress bar over a known word count
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {human_pos}/{human_len} ({percent}%, {per_sec}, eta {eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a styled spinner for runs too large to count
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {human_pos} words ({per_sec}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Interrupted,
    Failed,
}

/// Tracks timing and the word count of a run while it is in progress
#[derive(Debug)]
pub struct RunReport {
    started_at: DateTime<Local>,
    start: Instant,
    words: u64,
}

impl RunReport {
    pub fn start() -> Self {
        Self {
            started_at: Local::now(),
            start: Instant::now(),
            words: 0,
        }
    }

    #[inline]
    pub fn add_word(&mut self) {
        self.words += 1;
    }

    pub fn words(&self) -> u64 {
        self.words
    }

    /// Close the report; `bytes` is what the sink actually wrote
    pub fn finish(self, status: RunStatus, bytes: u64) -> RunSummary {
        RunSummary {
            started_at: self.started_at,
            finished_at: Local::now(),
            elapsed: self.start.elapsed(),
            words: self.words,
            bytes,
            status,
        }
    }
}

/// Final statistics of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
    pub words: u64,
    pub bytes: u64,
    pub status: RunStatus,
}

impl RunSummary {
    pub fn words_per_second(&self) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed > 0.0 {
            self.words as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print the summary, naming the output file if there is one
    pub fn print(&self, output: Option<&Path>) {
        let title = match self.status {
            RunStatus::Completed => "GENERATION COMPLETE".green().bold(),
            RunStatus::Interrupted => "GENERATION INTERRUPTED".yellow().bold(),
            RunStatus::Failed => "GENERATION FAILED".red().bold(),
        };

        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("                    {}", title);
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Started:        ".green(), self.started_at.format(TIMESTAMP_FORMAT));
        eprintln!("  {} {}", "Finished:       ".green(), self.finished_at.format(TIMESTAMP_FORMAT));
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed));
        eprintln!(
            "  {} {}",
            "Words generated:".green().bold(),
            format_number(self.words).green().bold()
        );
        eprintln!("  {} {}", "Data written:   ".green(), ByteSize(self.bytes));
        eprintln!("  {} {:.2} words/sec", "Throughput:     ".green(), self.words_per_second());

        if let Some(path) = output {
            eprintln!();
            match self.status {
                RunStatus::Completed => print_success(&format!("Wordlist saved to {}", path.display())),
                _ => print_warning(&format!("Partial wordlist left in {}", path.display())),
            }
        }

        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    format_digits(&n.to_string())
}

/// Format a possibly huge count with thousand separators
pub fn format_count(n: Option<u128>) -> String {
    match n {
        Some(n) => format_digits(&n.to_string()),
        None => "at least 2^128".to_string(),
    }
}

fn format_digits(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(10_000)), "10,000");
        assert_eq!(format_count(None), "at least 2^128");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_run_report() {
        let mut report = RunReport::start();
        for _ in 0..42 {
            report.add_word();
        }
        assert_eq!(report.words(), 42);

        let summary = report.finish(RunStatus::Interrupted, 42 * 5);
        assert_eq!(summary.words, 42);
        assert_eq!(summary.bytes, 210);
        assert_eq!(summary.status, RunStatus::Interrupted);
        assert!(summary.finished_at >= summary.started_at);
    }
}
