use std::{
  fs::File,
  io::Write,
  path::{Path, PathBuf},
};

use crate::ConvertError;

/// Encodes an 8-bit grayscale image as a baseline JPEG and writes it to the
/// given path.
///
/// The JPEG is first written to a temporary file alongside the destination,
/// which is then renamed into place. A failed or interrupted write never
/// leaves a partial file at `path`.
///
pub fn write_jpeg(
  pixels: Vec<u8>,
  width: u32,
  height: u32,
  path: &Path,
  quality: u8,
) -> Result<(), ConvertError> {
  // `from_raw()` only rejects buffers that are too short
  let pixel_count = pixels.len();
  let image = if pixel_count == width as usize * height as usize {
    image::GrayImage::from_raw(width, height, pixels)
  } else {
    None
  };

  let image = image.ok_or_else(|| ConvertError::Encode {
    details: format!("Pixel count {pixel_count} doesn't match {width}x{height}"),
  })?;

  let temp_path = path_append(path.to_path_buf(), ".tmp");
  let mut temp_file_renamer =
    TempFileRenamer::new(temp_path.clone(), path.to_path_buf());

  let write_error = |e: std::io::Error| ConvertError::Write {
    path: path.to_path_buf(),
    details: e.to_string(),
  };

  let output_file = File::create(&temp_path).map_err(write_error)?;
  let mut output_writer = std::io::BufWriter::new(output_file);

  image::codecs::jpeg::JpegEncoder::new_with_quality(
    &mut output_writer,
    quality,
  )
  .encode_image(&image)
  .map_err(|e| match e {
    image::ImageError::IoError(e) => write_error(e),
    e => ConvertError::Encode {
      details: e.to_string(),
    },
  })?;

  output_writer.flush().map_err(write_error)?;
  drop(output_writer);

  temp_file_renamer
    .commit()
    .map_err(|(_, details)| ConvertError::Write {
      path: path.to_path_buf(),
      details,
    })
}

/// Appends a suffix to a path.
///
fn path_append(mut path: PathBuf, suffix: &str) -> PathBuf {
  path.set_file_name(format!(
    "{}{}",
    path
      .file_name()
      .unwrap_or(std::ffi::OsStr::new(""))
      .to_string_lossy(),
    suffix
  ));

  path
}

/// Renames a temporary file to an output filename when [`Self::commit()`] is
/// called, otherwise deletes the temporary file on drop.
///
struct TempFileRenamer {
  temp_filename: PathBuf,
  output_filename: PathBuf,
  committed: bool,
}

impl TempFileRenamer {
  fn new(temp_filename: PathBuf, output_filename: PathBuf) -> Self {
    Self {
      temp_filename,
      output_filename,
      committed: false,
    }
  }

  fn commit(&mut self) -> Result<(), (String, String)> {
    std::fs::rename(&self.temp_filename, &self.output_filename).map_err(
      |e| {
        (
          format!(
            "Renaming '{}' to '{}'",
            self.temp_filename.display(),
            self.output_filename.display()
          ),
          e.to_string(),
        )
      },
    )?;

    self.committed = true;

    Ok(())
  }
}

impl Drop for TempFileRenamer {
  fn drop(&mut self) {
    if !self.committed {
      let _ = std::fs::remove_file(&self.temp_filename);
    }
  }
}
