//! Error types returned when converting DICOM files, and helpers for printing
//! them.

use std::io::Write;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream::Stderr};

/// Error trait implemented by all error types in this crate.
///
pub trait Dcm2JpegError: std::fmt::Display {
  /// Returns lines of text that describe an error in a human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String>;

  /// Prints details on the error to stderr.
  ///
  fn print(&self, task_description: &str) {
    print_error_lines(&self.to_lines(task_description));
  }
}

/// An error that occurred converting a single DICOM file. None of these abort
/// a batch conversion.
///
#[derive(Debug)]
pub enum ConvertError {
  /// The source file couldn't be opened or isn't valid DICOM.
  Decode { details: String },

  /// The source has no pixel data, or its pixel data couldn't be decoded.
  PixelData { details: String },

  /// The pixel data isn't a single-channel intensity image.
  UnsupportedSampleFormat { details: String },

  /// The JPEG encoder rejected the image.
  Encode { details: String },

  /// The output file couldn't be created, written, or moved into place.
  Write { path: PathBuf, details: String },

  /// The directory the output file goes in couldn't be created.
  CreateDirectory { path: PathBuf, details: String },
}

impl ConvertError {
  /// Returns the name of the error kind.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      Self::Decode { .. } => "Decode error",
      Self::PixelData { .. } => "Pixel data error",
      Self::UnsupportedSampleFormat { .. } => "Unsupported sample format",
      Self::Encode { .. } => "Encode error",
      Self::Write { .. } => "Write error",
      Self::CreateDirectory { .. } => "Directory creation error",
    }
  }
}

impl std::fmt::Display for ConvertError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Decode { details }
      | Self::PixelData { details }
      | Self::UnsupportedSampleFormat { details }
      | Self::Encode { details } => write!(f, "{}: {}", self.name(), details),

      Self::Write { path, details }
      | Self::CreateDirectory { path, details } => {
        write!(f, "{} for \"{}\": {}", self.name(), path.display(), details)
      }
    }
  }
}

impl std::error::Error for ConvertError {}

impl Dcm2JpegError for ConvertError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("{} {}", self.name(), task_description),
      "".to_string(),
    ];

    match self {
      Self::Write { path, details }
      | Self::CreateDirectory { path, details } => {
        lines.push(format!("  Path: {}", path.display()));
        lines.push(format!("  Details: {details}"));
      }

      Self::Decode { details }
      | Self::PixelData { details }
      | Self::UnsupportedSampleFormat { details }
      | Self::Encode { details } => lines.push(format!("  Details: {details}")),
    }

    lines
  }
}

/// An error that stops a tree conversion before any file is converted.
///
#[derive(Debug)]
pub enum WalkError {
  /// The input root doesn't exist or isn't a directory.
  InputNotDirectory { path: PathBuf },

  /// The output root couldn't be created.
  CreateOutputRoot { path: PathBuf, details: String },
}

impl std::fmt::Display for WalkError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InputNotDirectory { path } => {
        write!(f, "'{}' is not a valid directory", path.display())
      }

      Self::CreateOutputRoot { path, details } => write!(
        f,
        "Failed creating output directory '{}', details: {}",
        path.display(),
        details
      ),
    }
  }
}

impl std::error::Error for WalkError {}

impl Dcm2JpegError for WalkError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("Error {task_description}"),
      "".to_string(),
      format!("  Error: {self}"),
    ]
  }
}

/// Prints lines of error information to stderr.
///
pub fn print_error_lines(lines: &[String]) {
  let _ = std::io::stdout().flush();
  let _ = std::io::stderr().flush();

  eprintln!();
  eprintln!("{}", "-----".if_supports_color(Stderr, |text| text.red()));

  for line in lines {
    eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
  }

  eprintln!();
}
