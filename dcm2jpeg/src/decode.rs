use std::path::Path;

use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};

use crate::{ConvertError, PixelBuffer};

/// Reads a DICOM P10 file and decodes its pixel data into a [`PixelBuffer`]
/// holding the raw stored values of every frame. No Modality LUT or VOI LUT is
/// applied.
///
/// Only single-channel images are supported.
///
pub fn decode_file(path: &Path) -> Result<PixelBuffer, ConvertError> {
  let object =
    dicom_object::open_file(path).map_err(|e| ConvertError::Decode {
      details: e.to_string(),
    })?;

  let pixel_data =
    object
      .decode_pixel_data()
      .map_err(|e| ConvertError::PixelData {
        details: e.to_string(),
      })?;

  let samples_per_pixel = pixel_data.samples_per_pixel();
  if samples_per_pixel != 1 {
    return Err(ConvertError::UnsupportedSampleFormat {
      details: format!(
        "Samples per pixel is {samples_per_pixel}, only single-channel \
         images are supported"
      ),
    });
  }

  let options =
    ConvertOptions::new().with_modality_lut(ModalityLutOption::None);

  let samples: Vec<f64> = pixel_data
    .to_vec_with_options(&options)
    .map_err(|e| ConvertError::UnsupportedSampleFormat {
      details: e.to_string(),
    })?;

  let width = pixel_data.columns();
  let height = pixel_data.rows();
  let number_of_frames = pixel_data.number_of_frames();

  PixelBuffer::new(width, height, number_of_frames, samples).ok_or_else(|| {
    ConvertError::PixelData {
      details: format!(
        "Pixel data length doesn't match {number_of_frames} frame(s) of \
         {width}x{height}"
      ),
    }
  })
}
