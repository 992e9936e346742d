use std::path::Path;

use crate::{ConvertConfig, ConvertError, decode::decode_file, encode};

/// Details of a JPEG image written by [`convert_file()`].
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertedImage {
  pub width: u32,
  pub height: u32,

  /// The range of stored values that was mapped onto `0..=255`. Equal bounds
  /// mean the source was a constant image and the output is all black.
  pub min: f64,
  pub max: f64,
}

/// Converts a single DICOM P10 file to an 8-bit grayscale JPEG.
///
/// The stored values are rescaled linearly so that the smallest value in the
/// source becomes 0 and the largest becomes 255. For multi-frame sources the
/// range is taken over all frames and the first frame is written.
///
/// The parent directory of `destination` must already exist.
///
pub fn convert_file(
  source: &Path,
  destination: &Path,
  config: &ConvertConfig,
) -> Result<ConvertedImage, ConvertError> {
  let pixel_buffer = decode_file(source)?;

  let Some((min, max)) = pixel_buffer.min_max() else {
    return Err(ConvertError::UnsupportedSampleFormat {
      details: "Image has no pixels".to_string(),
    });
  };

  let pixels = pixel_buffer.normalize_first_frame();

  encode::write_jpeg(
    pixels,
    pixel_buffer.width(),
    pixel_buffer.height(),
    destination,
    config.jpeg_quality,
  )?;

  Ok(ConvertedImage {
    width: pixel_buffer.width(),
    height: pixel_buffer.height(),
    min,
    max,
  })
}
