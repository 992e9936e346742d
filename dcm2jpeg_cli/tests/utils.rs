use std::path::{Path, PathBuf};

use assert_cmd::{Command, assert::Assert, cargo::cargo_bin_cmd};
use dicom_core::{DataElement, PrimitiveValue, VR, value::C};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn dcm2jpeg_cli() -> Command {
  cargo_bin_cmd!("dcm2jpeg_cli")
}

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
  TempDir::new_in(temp_dir()).unwrap()
}

#[allow(dead_code)]
pub fn get_stdout(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[allow(dead_code)]
pub fn get_stderr(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

/// Returns all files under a directory, relative to it, sorted, and with `/`
/// separators.
///
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<String> {
  let mut files = vec![];
  list_files_into(root, root, &mut files);

  files.sort();
  files
}

fn list_files_into(root: &Path, directory: &Path, files: &mut Vec<String>) {
  for entry in std::fs::read_dir(directory).unwrap() {
    let path = entry.unwrap().path();

    if path.is_dir() {
      list_files_into(root, &path, files);
    } else {
      files.push(
        path
          .strip_prefix(root)
          .unwrap()
          .to_string_lossy()
          .replace('\\', "/"),
      );
    }
  }
}

/// Writes a single-frame 16-bit MONOCHROME2 DICOM P10 file, creating its
/// parent directory if needed.
///
#[allow(dead_code)]
pub fn write_dicom_file(path: &Path, width: u16, height: u16, samples: &[u16]) {
  let pixel_data = PrimitiveValue::U16(C::from_vec(samples.to_vec()));

  write_monochrome_dicom(path, width, height, 0, pixel_data);
}

/// Writes a single-frame signed 16-bit MONOCHROME2 DICOM P10 file, creating
/// its parent directory if needed.
///
#[allow(dead_code)]
pub fn write_signed_dicom_file(
  path: &Path,
  width: u16,
  height: u16,
  samples: &[i16],
) {
  let pixel_data = PrimitiveValue::I16(C::from_vec(samples.to_vec()));

  write_monochrome_dicom(path, width, height, 1, pixel_data);
}

fn write_monochrome_dicom(
  path: &Path,
  width: u16,
  height: u16,
  pixel_representation: u16,
  pixel_data: PrimitiveValue,
) {
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();

  let mut data_set = InMemDicomObject::new_empty();

  data_set.put(DataElement::new(
    tags::SOP_CLASS_UID,
    VR::UI,
    PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
  ));
  data_set.put(DataElement::new(
    tags::SOP_INSTANCE_UID,
    VR::UI,
    PrimitiveValue::from(SOP_INSTANCE_UID),
  ));
  data_set.put(DataElement::new(tags::ROWS, VR::US, us(height)));
  data_set.put(DataElement::new(tags::COLUMNS, VR::US, us(width)));
  data_set.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, us(1)));
  data_set.put(DataElement::new(
    tags::PHOTOMETRIC_INTERPRETATION,
    VR::CS,
    PrimitiveValue::from("MONOCHROME2"),
  ));
  data_set.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, us(16)));
  data_set.put(DataElement::new(tags::BITS_STORED, VR::US, us(16)));
  data_set.put(DataElement::new(tags::HIGH_BIT, VR::US, us(15)));
  data_set.put(DataElement::new(
    tags::PIXEL_REPRESENTATION,
    VR::US,
    us(pixel_representation),
  ));
  data_set.put(DataElement::new(tags::PIXEL_DATA, VR::OW, pixel_data));

  data_set
    .with_meta(
      FileMetaTableBuilder::new()
        .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
        .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
        .media_storage_sop_instance_uid(SOP_INSTANCE_UID),
    )
    .unwrap()
    .write_to_file(path)
    .unwrap();
}

/// An 8x8 horizontal gradient.
///
#[allow(dead_code)]
pub fn gradient() -> Vec<u16> {
  (0..64).map(|i| (i % 8) * 100).collect()
}

fn us(value: u16) -> PrimitiveValue {
  PrimitiveValue::U16(C::from_vec(vec![value]))
}

const SOP_INSTANCE_UID: &str = "1.2.826.0.1.3680043.10.1234.2";
