//! Entry point for the dcm2jpeg CLI tool.

use std::path::PathBuf;

use clap::Parser;

use dcm2jpeg::{ConsoleReporter, ConvertConfig, Dcm2JpegError};

#[derive(Parser)]
#[command(
  name = "dcm2jpeg",
  bin_name = "dcm2jpeg",
  version = env!("CARGO_PKG_VERSION"),
  about = "Converts DICOM (.dcm) files to JPEG (.jpeg) format",
  max_term_width = 80
)]
struct Cli {
  #[arg(
    help = "Path to the input directory containing .dcm files. It is searched \
      recursively, and the extension check is not case sensitive."
  )]
  input_directory: PathBuf,

  #[arg(
    help = "Path to the output directory where .jpeg files will be saved. The \
      directory structure of the input directory is mirrored here, and \
      directories are created as needed."
  )]
  output_directory: PathBuf,

  #[arg(
    long,
    help = "The quality level of the output JPEG images in the range 1-100.",
    default_value_t = 95,
    value_parser = clap::value_parser!(u8).range(1..=100),
  )]
  jpg_quality: u8,

  #[arg(
    long,
    default_value_t = false,
    help = "Exit with a non-zero status if any file failed to convert. By \
      default failures are reported but the exit status is zero."
  )]
  fail_on_error: bool,

  #[arg(
    long,
    default_value_t = false,
    help = "Write timing, file counts, and memory stats to stderr on exit"
  )]
  print_stats: bool,
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  let started_at = std::time::Instant::now();

  let config = ConvertConfig::default().jpeg_quality(cli.jpg_quality);

  let summary = match dcm2jpeg::convert_tree(
    &cli.input_directory,
    &cli.output_directory,
    &config,
    &mut ConsoleReporter,
  ) {
    Ok(summary) => summary,

    Err(e) => {
      e.print(&format!(
        "converting \"{}\"",
        cli.input_directory.display()
      ));
      std::process::exit(1);
    }
  };

  if cli.print_stats {
    #[cfg(not(windows))]
    let peak_memory_mb = get_peak_memory_usage() as f64 / (1024.0 * 1024.0);

    eprintln!();
    eprintln!("-----");
    eprintln!("Files converted:   {}", summary.converted);
    eprintln!("Files failed:      {}", summary.failed);
    eprintln!(
      "Time elapsed:      {:.2} seconds",
      started_at.elapsed().as_secs_f64()
    );

    #[cfg(not(windows))]
    eprintln!("Peak memory usage: {:.0} MiB", peak_memory_mb);
  }

  if cli.fail_on_error && summary.has_failures() {
    return Err(());
  }

  Ok(())
}

#[cfg(not(windows))]
fn get_peak_memory_usage() -> i64 {
  let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
  unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };

  let mut max = usage.ru_maxrss;

  // On Linux, ru_maxrss is in KiB
  if std::env::consts::OS == "linux" {
    max *= 1024;
  }

  max
}
