/// Decoded intensity samples of a single-channel DICOM image. All frames are
/// held in one flat buffer in row-major order, frame after frame.
///
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
  width: u32,
  height: u32,
  number_of_frames: u32,
  samples: Vec<f64>,
}

impl PixelBuffer {
  /// Creates a new pixel buffer. Returns `None` if the number of samples
  /// doesn't match the given dimensions and frame count.
  ///
  pub fn new(
    width: u32,
    height: u32,
    number_of_frames: u32,
    samples: Vec<f64>,
  ) -> Option<Self> {
    let expected_len =
      width as usize * height as usize * number_of_frames as usize;

    if samples.len() != expected_len {
      return None;
    }

    Some(Self {
      width,
      height,
      number_of_frames,
      samples,
    })
  }

  /// Returns the width in pixels of each frame.
  ///
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Returns the height in pixels of each frame.
  ///
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Returns the number of frames held in this pixel buffer.
  ///
  pub fn number_of_frames(&self) -> u32 {
    self.number_of_frames
  }

  /// Returns whether this pixel buffer has no pixels.
  ///
  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  /// Returns the samples of all frames.
  ///
  pub fn samples(&self) -> &[f64] {
    &self.samples
  }

  /// Returns the samples of the first frame.
  ///
  pub fn first_frame(&self) -> &[f64] {
    let frame_len = self.width as usize * self.height as usize;

    &self.samples[..frame_len.min(self.samples.len())]
  }

  /// Returns the minimum and maximum sample values across all frames, or
  /// `None` if the buffer is empty.
  ///
  pub fn min_max(&self) -> Option<(f64, f64)> {
    let mut iter = self.samples.iter().copied();
    let first = iter.next()?;

    Some(iter.fold((first, first), |(min, max), value| {
      (min.min(value), max.max(value))
    }))
  }

  /// Rescales the first frame into the 8-bit range using the intensity range
  /// of all frames. See [`normalize_sample()`] for the mapping.
  ///
  pub fn normalize_first_frame(&self) -> Vec<u8> {
    let Some((min, max)) = self.min_max() else {
      return vec![];
    };

    self
      .first_frame()
      .iter()
      .map(|value| normalize_sample(*value, min, max))
      .collect()
  }
}

/// Maps a sample linearly from `min..=max` to `0..=255`, rounding to the
/// nearest integer.
///
/// A constant image, i.e. `min == max`, maps every sample to zero.
///
pub fn normalize_sample(value: f64, min: f64, max: f64) -> u8 {
  let range = max - min;
  if range <= 0.0 || !range.is_finite() {
    return 0;
  }

  let scaled = ((value - min) / range * 255.0).round();

  // NaN falls through to zero
  if scaled >= 255.0 {
    255
  } else if scaled > 0.0 {
    scaled as u8
  } else {
    0
  }
}
