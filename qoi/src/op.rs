use std::io;

use crate::meta::QOI_MAX_RUN;

/// An enumeration of each possible QOI encoding "chunk", or Op. Fields hold
/// the values exactly as they are packed into the chunk, biases included.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
  // `QOI_OP_INDEX`, index into the state's pixel cache.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 0 |      index       |
  //
  Index(u8),

  // `QOI_OP_DIFF`, contains the red, green, and blue color difference from
  // the previous pixel with a bias of +2.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 1 |  dr |  dg |  db  |
  //
  Diff(u8, u8, u8),

  // `QOI_OP_LUMA`, contains the green difference from the previous pixel
  // with a bias of +32, and the red-green and blue-green differences with a
  // bias of +8.
  //
  // | 7 6   5  4  3  2  1  0 | 7  6  5  4   3  2  1  0 |
  // |------------------------|-------------------------|
  // | 1 0 |       dg         |   dr - dg  |   db - dg  |
  //
  Luma(u8, u8, u8),

  // `QOI_OP_RUN`, contains the length of the run, 1 to 62, stored with a
  // bias of -1.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 1 1 |      run         |
  Run(u8),

  // `QOI_OP_RGB`, contains the red, green, and blue values of a pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|
  // | 1  1  1  1  1  1  1  0 |   r  |   g  |   b  |
  //
  Rgb(u8, u8, u8),

  // `QOI_OP_RGBA`, contains the red, green, blue, and alpha values of a
  // pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|------|
  // | 1  1  1  1  1  1  1  1 |   r  |   g  |   b  |   a  |
  //
  Rgba(u8, u8, u8, u8),
}

impl Op {
  const MASK_DIFF: u8 = 0x03;
  const MASK_INDEX: u8 = 0x3f;
  const MASK_LUMA_1: u8 = 0x3f;
  const MASK_LUMA_2: u8 = 0x0f;
  const MASK_RUN: u8 = 0x3f;

  const TAG_DIFF: u8 = 0x40;
  const TAG_INDEX: u8 = 0x00;
  const TAG_LUMA: u8 = 0x80;
  const TAG_RGB: u8 = 0xfe;
  const TAG_RGBA: u8 = 0xff;
  const TAG_RUN: u8 = 0xc0;

  // Encodes the `Op` and writes it as bytes into the given writer. Fields
  // must already fit their bit fields, which the encoder guarantees.
  pub(crate) fn write_to<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
    debug_assert!(self.is_packable(), "{:?} does not fit its chunk", self);

    match *self {
      Op::Index(index) => {
        writer.write_all(&[Op::TAG_INDEX | index])?;
      }
      Op::Diff(dr, dg, db) => {
        let byte = Op::TAG_DIFF
          | (dr & Op::MASK_DIFF) << 4
          | (dg & Op::MASK_DIFF) << 2
          | (db & Op::MASK_DIFF);

        writer.write_all(&[byte])?;
      }
      Op::Luma(dg, dr_dg, db_dg) => {
        writer.write_all(&[
          Op::TAG_LUMA | (dg & Op::MASK_LUMA_1),
          (dr_dg & Op::MASK_LUMA_2) << 4 | (db_dg & Op::MASK_LUMA_2),
        ])?;
      }
      Op::Run(run_count) => {
        writer.write_all(&[Op::TAG_RUN | ((run_count - 1) & Op::MASK_RUN)])?;
      }
      Op::Rgb(r, g, b) => {
        writer.write_all(&[Op::TAG_RGB, r, g, b])?;
      }
      Op::Rgba(r, g, b, a) => {
        writer.write_all(&[Op::TAG_RGBA, r, g, b, a])?;
      }
    }

    Ok(())
  }

  // Whether every field fits the bit field it is packed into.
  fn is_packable(&self) -> bool {
    match *self {
      Op::Index(index) => index <= Op::MASK_INDEX,
      Op::Diff(dr, dg, db) => dr <= Op::MASK_DIFF && dg <= Op::MASK_DIFF && db <= Op::MASK_DIFF,
      Op::Luma(dg, dr_dg, db_dg) => {
        dg <= Op::MASK_LUMA_1 && dr_dg <= Op::MASK_LUMA_2 && db_dg <= Op::MASK_LUMA_2
      }
      Op::Run(run_count) => (1..=QOI_MAX_RUN).contains(&run_count),
      Op::Rgb(..) | Op::Rgba(..) => true,
    }
  }

  /// The kind of chunk this `Op` is encoded as.
  pub fn kind(&self) -> OpKind {
    match self {
      Op::Index(..) => OpKind::Index,
      Op::Diff(..) => OpKind::Diff,
      Op::Luma(..) => OpKind::Luma,
      Op::Run(..) => OpKind::Run,
      Op::Rgb(..) => OpKind::Rgb,
      Op::Rgba(..) => OpKind::Rgba,
    }
  }

  /// Number of bytes the encoded chunk occupies.
  pub fn byte_len(&self) -> usize {
    match self {
      Op::Index(..) | Op::Diff(..) | Op::Run(..) => 1,
      Op::Luma(..) => 2,
      Op::Rgb(..) => 4,
      Op::Rgba(..) => 5,
    }
  }

  /// Number of bits the encoded chunk occupies.
  pub fn bits(&self) -> u64 {
    self.byte_len() as u64 * 8
  }

  /// Number of pixels the chunk stands for. A run stands for its whole
  /// length, every other chunk for exactly one pixel.
  pub fn pixels(&self) -> u64 {
    match self {
      Op::Run(run_count) => u64::from(*run_count),
      _ => 1,
    }
  }
}

/// The six chunk kinds, without their payloads.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpKind {
  Rgb,
  Rgba,
  Index,
  Diff,
  Luma,
  Run,
}

impl OpKind {
  /// Every kind, in the order statistics are reported.
  pub const ALL: [OpKind; 6] = [
    OpKind::Rgb,
    OpKind::Rgba,
    OpKind::Index,
    OpKind::Diff,
    OpKind::Luma,
    OpKind::Run,
  ];

  /// The canonical `QOI_OP_*` name of the chunk kind.
  pub fn name(&self) -> &'static str {
    match self {
      OpKind::Rgb => "QOI_OP_RGB",
      OpKind::Rgba => "QOI_OP_RGBA",
      OpKind::Index => "QOI_OP_INDEX",
      OpKind::Diff => "QOI_OP_DIFF",
      OpKind::Luma => "QOI_OP_LUMA",
      OpKind::Run => "QOI_OP_RUN",
    }
  }

  // Position of the kind in `OpKind::ALL`, used to index per kind counters.
  pub(crate) fn slot(&self) -> usize {
    match self {
      OpKind::Rgb => 0,
      OpKind::Rgba => 1,
      OpKind::Index => 2,
      OpKind::Diff => 3,
      OpKind::Luma => 4,
      OpKind::Run => 5,
    }
  }
}
