use std::path::Path;

use owo_colors::{OwoColorize, Stream::Stderr};

use crate::ConvertError;

/// Receives the outcome of each file visited by a tree conversion.
///
pub trait Reporter {
  /// Called after `source` has been written to `destination`.
  ///
  fn converted(&mut self, source: &Path, destination: &Path);

  /// Called when converting `source` failed. The conversion carries on with
  /// the next file.
  ///
  fn failed(&mut self, source: &Path, error: &ConvertError);

  /// Called when a directory entry under the input root couldn't be read, so
  /// the files beneath it may not have been visited.
  ///
  fn unreadable(&mut self, path: Option<&Path>, details: &str);
}

/// Reports progress on stdout and failures on stderr, one line per file.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
  fn converted(&mut self, source: &Path, destination: &Path) {
    println!(
      "Converted: {} -> {}",
      source.display(),
      destination.display()
    );
  }

  fn failed(&mut self, source: &Path, error: &ConvertError) {
    let line = format!("Failed to convert {}: {}", source.display(), error);

    eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
  }

  fn unreadable(&mut self, path: Option<&Path>, details: &str) {
    let line = match path {
      Some(path) => format!("Failed to read {}: {}", path.display(), details),
      None => format!("Failed to read directory entry: {details}"),
    };

    eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
  }
}
