/// Configuration used when converting DICOM files to JPEG images.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertConfig {
  pub(crate) jpeg_quality: u8,
}

impl Default for ConvertConfig {
  fn default() -> Self {
    Self { jpeg_quality: 95 }
  }
}

impl ConvertConfig {
  /// The quality level used by the JPEG encoder, in the range 1-100. Values
  /// outside this range are clamped.
  ///
  /// By default the quality is 95.
  ///
  pub fn jpeg_quality(mut self, value: u8) -> Self {
    self.jpeg_quality = value.clamp(1, 100);
    self
  }
}
