use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

/// The extension given to every output file.
///
pub const OUTPUT_EXTENSION: &str = "jpeg";

/// Returns whether a file name ends with `.dcm`, ignoring case.
///
pub fn is_dicom_file_name(file_name: &OsStr) -> bool {
  file_name
    .to_string_lossy()
    .to_ascii_lowercase()
    .ends_with(".dcm")
}

/// Returns the path of the JPEG that mirrors `source` under `output_root`.
///
/// The directories between `input_root` and `source` are carried over as-is,
/// and the file's extension is replaced with `.jpeg`, e.g.
/// `input_root/a/b/img1.DCM` maps to `output_root/a/b/img1.jpeg`.
///
/// Returns `None` if `source` isn't inside `input_root`.
///
pub fn output_path_for(
  input_root: &Path,
  output_root: &Path,
  source: &Path,
) -> Option<PathBuf> {
  let relative_path = source.strip_prefix(input_root).ok()?;
  let file_stem = relative_path.file_stem()?;

  let mut file_name = file_stem.to_os_string();
  file_name.push(".");
  file_name.push(OUTPUT_EXTENSION);

  let mut output_path = output_root.to_path_buf();
  if let Some(relative_directory) = relative_path
    .parent()
    .filter(|directory| !directory.as_os_str().is_empty())
  {
    output_path.push(relative_directory);
  }
  output_path.push(file_name);

  Some(output_path)
}
