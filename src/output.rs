//! Output management module
//!
//! Writes generated words, one per line, to the console or a file.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::GenError;

/// Default buffer size for file writing (8MB)
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Words between forced flushes, so a growing file can be watched
pub const FLUSH_INTERVAL: u64 = 100_000;

/// Where generated words go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Console, Self::File)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Console => None,
            Self::File(path) => Some(path),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Line writer for generated words
///
/// The underlying writer is flushed every [`FLUSH_INTERVAL`] words and when
/// the sink is dropped, so an early return or an interrupt still leaves all
/// written words on disk.
pub struct WordSink<W: Write> {
    writer: W,
    label: String,
    words_written: u64,
    bytes_written: u64,
}

impl WordSink<Box<dyn Write>> {
    /// Open the sink for a target. Files are created or truncated.
    pub fn open(target: &OutputTarget, buffer_size: usize) -> Result<Self, GenError> {
        let writer: Box<dyn Write> = match target {
            OutputTarget::Console => Box::new(BufWriter::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| GenError::write(target.to_string(), e))?;
                Box::new(BufWriter::<File>::with_capacity(buffer_size, file))
            }
        };

        Ok(Self::new(writer, target.to_string()))
    }
}

impl<W: Write> WordSink<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
            words_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one word followed by a newline
    pub fn write_word(&mut self, word: &str) -> Result<(), GenError> {
        self.writer
            .write_all(word.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| GenError::write(self.label.clone(), e))?;

        self.words_written += 1;
        self.bytes_written += word.len() as u64 + 1;

        if self.words_written % FLUSH_INTERVAL == 0 {
            log::debug!("Flushing {} after {} words", self.label, self.words_written);
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), GenError> {
        self.writer
            .flush()
            .map_err(|e| GenError::write(self.label.clone(), e))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Drop for WordSink<W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
