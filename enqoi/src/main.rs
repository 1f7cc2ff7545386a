//! Converts an image into a QOI image.
//!
//! # Usage
//!
//! ```sh
//! enqoi -i photo.png -o photo.qoi
//! ```
//!
//! Reads and writes standard input and output when `-i` or `-o` are left out,
//! so it also fits in a pipeline:
//!
//! ```sh
//! curl -s https://example.com/photo.jpg | enqoi -v > photo.qoi
//! ```
//!
//! PNG, JPEG, BMP, TGA, GIF, and PNM inputs are supported. Images with an
//! alpha channel are tagged as RGBA, all others as RGB. Passing `-l` tags the
//! output as linear rather than sRGB, no colorspace conversion is performed.
//! Passing `-v` prints encoding statistics to standard error once done.
//!
//! Diagnostics are logged through `env_logger`, set `RUST_LOG=debug` for
//! more detail.

mod report;

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use qoi::{write_end_marker, write_header, Channels, Colorspace, Encoder, ImageMeta, Pixel};

/// Converts PNG, JPEG, BMP, TGA, GIF, and PNM images into QOI images.
#[derive(Parser, Debug)]
#[command(name = "enqoi")]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Input image file, standard input when omitted
  #[arg(short, long, value_name = "INPUT")]
  input: Option<PathBuf>,

  /// Output QOI file, standard output when omitted
  #[arg(short, long, value_name = "OUTPUT")]
  output: Option<PathBuf>,

  /// Tag the output as linear instead of sRGB. No colorspace conversion is
  /// performed
  #[arg(short, long)]
  linear: bool,

  /// Print encoding statistics to standard error
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Args::parse();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("enqoi: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> Result<()> {
  let source = read_input(args)?;
  let image = image::load_from_memory(&source).context("failed to decode input")?;

  let channels = if image.color().has_alpha() {
    Channels::Rgba
  } else {
    Channels::Rgb
  };

  info!(
    "decoded {}x{} {:?} image, encoding as {:?}",
    image.width(),
    image.height(),
    image.color(),
    channels
  );

  let rgba = image.into_rgba8();
  let meta = ImageMeta {
    width: rgba.width(),
    height: rgba.height(),
    channels,
    colorspace: if args.linear {
      Colorspace::Linear
    } else {
      Colorspace::Srgb
    },
  };
  let pixels: Vec<Pixel> = rgba.pixels().map(|pixel| Pixel::from(pixel.0)).collect();
  drop(rgba);

  let mut writer = BufWriter::new(open_output(args)?);
  let mut encoder = if args.verbose {
    Encoder::with_stats(meta)
  } else {
    Encoder::new(meta)
  };

  write_header(&meta, &mut writer).context("failed to write output")?;

  let start = Instant::now();
  encoder.encode_pixels(&pixels, &mut writer).context("failed to write output")?;
  let elapsed = start.elapsed();

  encoder.finish(&mut writer).context("failed to write output")?;
  write_end_marker(&mut writer).context("failed to write output")?;
  writer.flush().context("failed to write output")?;

  debug!("encoded {} pixels in {:?}", meta.num_pixels(), elapsed);

  if let Some(stats) = encoder.stats() {
    report::write_report(stats, elapsed, io::stderr().lock())
      .context("failed to write statistics")?;
  }

  Ok(())
}

fn read_input(args: &Args) -> Result<Vec<u8>> {
  match &args.input {
    Some(path) => {
      debug!("reading {}", path.display());
      fs::read(path).with_context(|| format!("{}", path.display()))
    }
    None => {
      debug!("reading standard input");
      let mut source = Vec::new();
      io::stdin()
        .lock()
        .read_to_end(&mut source)
        .context("failed to read standard input")?;
      Ok(source)
    }
  }
}

fn open_output(args: &Args) -> Result<Box<dyn Write>> {
  match &args.output {
    Some(path) => {
      debug!("writing {}", path.display());
      let file = File::create(path).with_context(|| format!("{}", path.display()))?;
      Ok(Box::new(file))
    }
    None => Ok(Box::new(io::stdout().lock())),
  }
}
