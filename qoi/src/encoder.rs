use std::io;

use log::debug;

use crate::error::Error;
use crate::meta::ImageMeta;
use crate::op::Op;
use crate::pixel::Pixel;
use crate::state::State;
use crate::stats::Stats;

/// A QOI chunk stream encoder for a single image.
///
/// Pixels are fed in raster order through `encode_pixels`, in as many calls
/// as convenient, and the stream is completed with `finish`. The encoder
/// only produces the chunk stream; the header and end marker surrounding it
/// are written with `write_header` and `write_end_marker`.
///
/// Every encoder owns its state exclusively, so independent images can be
/// encoded concurrently by separate encoders.
///
/// ```rust
/// use qoi::{write_end_marker, write_header, Channels, Colorspace, Encoder, ImageMeta, Pixel};
///
/// let meta = ImageMeta { width: 2, height: 1, channels: Channels::Rgb, colorspace: Colorspace::Srgb };
/// let pixels = [Pixel::from([10, 20, 30]), Pixel::from([10, 20, 30])];
/// let mut dest = Vec::new();
///
/// let mut encoder = Encoder::with_stats(meta);
/// write_header(&meta, &mut dest).unwrap();
/// encoder.encode_pixels(&pixels, &mut dest).unwrap();
/// encoder.finish(&mut dest).unwrap();
/// write_end_marker(&mut dest).unwrap();
///
/// assert_eq!(dest.len(), 14 + 4 + 1 + 8);
/// assert_eq!(encoder.stats().map(|stats| stats.total_pixels()), Some(2));
/// ```
pub struct Encoder {
  meta: ImageMeta,
  state: State,
  stats: Option<Stats>,
  finished: bool,
  // Set once a write fails. The chunk stream is missing chunks from then on.
  poisoned: bool,
}

// The chunks chosen for a single pixel. A pending run is flushed ahead of
// the pixel's own chunk, and a pixel extending a run has no chunk of its own.
#[derive(Debug, Default, Eq, PartialEq)]
struct Decision {
  flush: Option<Op>,
  op: Option<Op>,
}

impl Decision {
  fn ops(self) -> impl Iterator<Item = Op> {
    self.flush.into_iter().chain(self.op)
  }
}

impl Encoder {
  /// Creates an encoder that does not track statistics.
  pub fn new(meta: ImageMeta) -> Self {
    Self::create(meta, None)
  }

  /// Creates an encoder that tracks statistics, see `Encoder::stats`.
  pub fn with_stats(meta: ImageMeta) -> Self {
    Self::create(meta, Some(Stats::new()))
  }

  fn create(meta: ImageMeta, stats: Option<Stats>) -> Self {
    debug!(
      "creating encoder for {}x{} image, {:?}, {:?}, stats {}",
      meta.width,
      meta.height,
      meta.channels,
      meta.colorspace,
      if stats.is_some() { "on" } else { "off" },
    );

    Self { meta, state: State::new(), stats, finished: false, poisoned: false }
  }

  /// The metadata this encoder was created with.
  pub fn meta(&self) -> &ImageMeta {
    &self.meta
  }

  /// Statistics of the chunks emitted so far, or `None` when the encoder was
  /// created without statistics tracking.
  pub fn stats(&self) -> Option<&Stats> {
    self.stats.as_ref()
  }

  /// Whether `finish` has been called.
  pub fn is_finished(&self) -> bool {
    self.finished
  }

  /// Whether a previous write failed. A poisoned encoder refuses any further
  /// work with `Error::EncoderPoisoned`.
  pub fn is_poisoned(&self) -> bool {
    self.poisoned
  }

  /// Encodes a single pixel, writing any completed chunks to `writer`.
  pub fn encode_pixel<W: io::Write>(&mut self, pixel: Pixel, mut writer: W) -> Result<(), Error> {
    self.ensure_accepting()?;

    for op in self.decide(pixel).ops() {
      self.emit(op, &mut writer)?;
    }

    Ok(())
  }

  /// Encodes the given pixels in order, writing completed chunks to
  /// `writer`. A run still open after the last pixel is kept pending so that
  /// it may continue into the next call.
  pub fn encode_pixels<W: io::Write>(&mut self, pixels: &[Pixel], mut writer: W) -> Result<(), Error> {
    self.ensure_accepting()?;

    for pixel in pixels {
      for op in self.decide(*pixel).ops() {
        self.emit(op, &mut writer)?;
      }
    }

    Ok(())
  }

  /// Flushes a pending run and completes the chunk stream. Calling `finish`
  /// again does nothing, encoding more pixels fails with
  /// `Error::EncoderFinished`. Fails with `Error::EncoderPoisoned` when an
  /// earlier write failed.
  pub fn finish<W: io::Write>(&mut self, mut writer: W) -> Result<(), Error> {
    if self.finished {
      return Ok(());
    }

    if self.poisoned {
      return Err(Error::EncoderPoisoned);
    }

    // The run is only cleared once its chunk is written.
    if self.state.run_count > 0 {
      self.emit(Op::Run(self.state.run_count), &mut writer)?;
      self.state.run_count = 0;
    }

    self.finished = true;

    if let Some(stats) = &self.stats {
      debug!(
        "finished encoding {} pixels into {} bits",
        stats.total_pixels(),
        stats.total_bits()
      );
    }

    Ok(())
  }

  fn ensure_accepting(&self) -> Result<(), Error> {
    if self.finished {
      return Err(Error::EncoderFinished);
    }

    if self.poisoned {
      return Err(Error::EncoderPoisoned);
    }

    Ok(())
  }

  // Chooses the chunks for `pixel` and updates the encoding state. Nothing is
  // written here.
  fn decide(&mut self, pixel: Pixel) -> Decision {
    let state = &mut self.state;

    if pixel == state.prev_pixel {
      return Decision {
        flush: state.extend_run().map(Op::Run),
        op: None,
      };
    }

    let flush = state.take_run().map(Op::Run);
    let op = match state.cache_match_or_replace(pixel) {
      Some(index) => Op::Index(index),
      None => Self::choose_op(pixel, &state.prev_pixel),
    };

    state.prev_pixel = pixel;

    Decision { flush, op: Some(op) }
  }

  // Picks the smallest chunk able to express `pixel` relative to `prev`.
  fn choose_op(pixel: Pixel, prev: &Pixel) -> Op {
    let diff = pixel.diff(prev);

    if let Some((dr, dg, db)) = diff.as_small() {
      return Op::Diff(dr, dg, db);
    }

    if let Some((dg, dr_dg, db_dg)) = diff.as_luma() {
      return Op::Luma(dg, dr_dg, db_dg);
    }

    if pixel.a == prev.a {
      return Op::Rgb(pixel.r, pixel.g, pixel.b);
    }

    Op::Rgba(pixel.r, pixel.g, pixel.b, pixel.a)
  }

  // Writes a single chunk and accounts for it in the statistics. The state
  // has already moved past the chunk, so a failed write poisons the encoder.
  fn emit<W: io::Write>(&mut self, op: Op, writer: W) -> Result<(), Error> {
    if let Err(io_err) = op.write_to(writer) {
      self.poisoned = true;
      return Err(Error::from(io_err));
    }

    if let Some(stats) = &mut self.stats {
      stats.record(&op);
    }

    Ok(())
  }
}
