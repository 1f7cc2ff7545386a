use crate::meta::{QOI_END_LEN, QOI_HEADER_LEN};
use crate::op::{Op, OpKind};

/// Counters describing an encoded chunk stream. Every counter only ever
/// grows, and the per kind counters always sum up to the totals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
  total_pixels: u64,
  total_bits: u64,
  op_pixels: [u64; 6],
  op_bits: [u64; 6],
}

impl Stats {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attributes an emitted chunk's bits and pixels to its kind.
  pub fn record(&mut self, op: &Op) {
    let slot = op.kind().slot();
    let bits = op.bits();
    let pixels = op.pixels();

    self.total_bits += bits;
    self.total_pixels += pixels;
    self.op_bits[slot] += bits;
    self.op_pixels[slot] += pixels;
  }

  /// Total number of pixels represented by the chunk stream.
  pub fn total_pixels(&self) -> u64 {
    self.total_pixels
  }

  /// Total number of bits of the chunk stream, header and end marker
  /// excluded.
  pub fn total_bits(&self) -> u64 {
    self.total_bits
  }

  /// Number of pixels represented by chunks of the given kind.
  pub fn pixels(&self, kind: OpKind) -> u64 {
    self.op_pixels[kind.slot()]
  }

  /// Number of bits spent on chunks of the given kind.
  pub fn bits(&self, kind: OpKind) -> u64 {
    self.op_bits[kind.slot()]
  }

  /// Average number of bits spent per pixel, `0.0` for an empty stream.
  pub fn bits_per_pixel(&self) -> f64 {
    if self.total_pixels == 0 {
      return 0.0;
    }

    self.total_bits as f64 / self.total_pixels as f64
  }

  /// Share of pixels represented by chunks of the given kind, as a
  /// percentage. `0.0` for an empty stream.
  pub fn percent(&self, kind: OpKind) -> f64 {
    if self.total_pixels == 0 {
      return 0.0;
    }

    100.0 * self.pixels(kind) as f64 / self.total_pixels as f64
  }

  /// Size in bytes of the complete QOI image, header and end marker
  /// included.
  pub fn encoded_len(&self) -> u64 {
    (QOI_HEADER_LEN + QOI_END_LEN) as u64 + self.total_bits / 8
  }
}
