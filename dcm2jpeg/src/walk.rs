use std::path::{Path, PathBuf};

use crate::{
  ConvertConfig, ConvertError, Reporter, WalkError, convert_file,
  paths::{is_dicom_file_name, output_path_for},
};

/// Counts of the files attempted by [`convert_tree()`].
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WalkSummary {
  pub converted: usize,
  pub failed: usize,
}

impl WalkSummary {
  /// Returns whether any file failed to convert, or any part of the input
  /// tree couldn't be read.
  ///
  pub fn has_failures(&self) -> bool {
    self.failed > 0
  }
}

/// Converts every `.dcm` file under `input_root` to a JPEG under
/// `output_root`, mirroring the directory structure of the input. The
/// extension check is not case sensitive.
///
/// Output directories are created as they are needed. Failures on individual
/// files are passed to `reporter` and don't stop the walk. An error is only
/// returned when the walk can't start, i.e. `input_root` isn't a directory or
/// `output_root` can't be created.
///
pub fn convert_tree(
  input_root: &Path,
  output_root: &Path,
  config: &ConvertConfig,
  reporter: &mut impl Reporter,
) -> Result<WalkSummary, WalkError> {
  if !input_root.is_dir() {
    return Err(WalkError::InputNotDirectory {
      path: input_root.to_path_buf(),
    });
  }

  std::fs::create_dir_all(output_root).map_err(|e| {
    WalkError::CreateOutputRoot {
      path: output_root.to_path_buf(),
      details: e.to_string(),
    }
  })?;

  let mut summary = WalkSummary::default();

  let entries = walkdir::WalkDir::new(input_root).sort_by_file_name();

  for entry in entries {
    let entry = match entry {
      Ok(entry) => entry,

      Err(e) => {
        reporter.unreadable(e.path(), &e.to_string());
        summary.failed += 1;
        continue;
      }
    };

    // Symlinks to files are converted, symlinks to directories aren't followed
    let is_file = entry.file_type().is_file()
      || (entry.path_is_symlink() && entry.path().is_file());

    if !is_file || !is_dicom_file_name(entry.file_name()) {
      continue;
    }

    let source = entry.path();

    match convert_entry(input_root, output_root, source, config) {
      Ok(destination) => {
        reporter.converted(source, &destination);
        summary.converted += 1;
      }

      Err(e) => {
        reporter.failed(source, &e);
        summary.failed += 1;
      }
    }
  }

  Ok(summary)
}

fn convert_entry(
  input_root: &Path,
  output_root: &Path,
  source: &Path,
  config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
  // Entries yielded by the walk always start with the input root
  let destination =
    output_path_for(input_root, output_root, source).ok_or_else(|| {
      ConvertError::Write {
        path: source.to_path_buf(),
        details: "Path is outside the input directory".to_string(),
      }
    })?;

  if let Some(output_directory) = destination.parent() {
    std::fs::create_dir_all(output_directory).map_err(|e| {
      ConvertError::CreateDirectory {
        path: output_directory.to_path_buf(),
        details: e.to_string(),
      }
    })?;
  }

  convert_file(source, &destination, config)?;

  Ok(destination)
}
