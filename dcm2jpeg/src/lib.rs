//! Converts DICOM P10 files to 8-bit grayscale JPEG images.
//!
//! A single file is converted with [`convert_file()`], and a whole directory
//! tree with [`convert_tree()`], which mirrors the input directory structure
//! under an output directory.

mod config;
mod convert;
mod decode;
mod encode;
pub mod error;
mod paths;
mod pixel_buffer;
mod report;
mod walk;


pub use config::ConvertConfig;
pub use convert::{ConvertedImage, convert_file};
pub use decode::decode_file;
pub use encode::write_jpeg;
pub use error::{ConvertError, Dcm2JpegError, WalkError};
pub use paths::{OUTPUT_EXTENSION, is_dicom_file_name, output_path_for};
pub use pixel_buffer::{PixelBuffer, normalize_sample};
pub use report::{ConsoleReporter, Reporter};
pub use walk::{WalkSummary, convert_tree};
