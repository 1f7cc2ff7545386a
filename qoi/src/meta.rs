use crate::error::Error;

pub const QOI_BYTES_END: [u8; QOI_END_LEN] = [0, 0, 0, 0, 0, 0, 0, 1];
pub const QOI_BYTES_MAGIC: &[u8; 4] = b"qoif";
pub const QOI_CACHE_LEN: usize = 64;
pub const QOI_END_LEN: usize = 8;
pub const QOI_HEADER_LEN: usize = 14;
pub const QOI_MAX_RUN: u8 = 62;

/// Metadata describing an image to be encoded. The encoder copies it into
/// the header verbatim, no colorspace conversion takes place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMeta {
  /// The number of color channels the image's pixels contain, see
  /// [Channels]. Color channels are assumed to not be pre-multiplied with
  /// the alpha channel ("un-premultiplied alpha").
  pub channels: Channels,
  /// The image's colorspace, see [Colorspace].
  pub colorspace: Colorspace,
  /// The image's height.
  pub height: u32,
  /// The image's width.
  pub width: u32,
}

impl ImageMeta {
  /// Returns the total number of pixels that make up the image. Computed in
  /// 64 bits so that `u32::MAX * u32::MAX` can not overflow.
  pub fn num_pixels(&self) -> u64 {
    u64::from(self.width) * u64::from(self.height)
  }
}

/// The channel layout recorded in the header. Pixels are always handed to
/// the encoder as RGBA, this only tells a decoder what to hand back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channels {
  Rgb = 3,
  Rgba = 4,
}

/// A `TryFrom` implementation for converting any `u8` into `Channels`. `3`
/// maps to `Channels::Rgb`, and `4` maps to `Channels::Rgba`. All other `u8`
/// values are invalid.
impl TryFrom<u8> for Channels {
  type Error = Error;

  fn try_from(byte: u8) -> Result<Self, Self::Error> {
    match byte {
      3 => Ok(Channels::Rgb),
      4 => Ok(Channels::Rgba),
      _ => Err(Error::InvalidChannels(byte)),
    }
  }
}

/// How an image's color channels are to be interpreted. sRGB with linear
/// alpha, or all channels linear.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Colorspace {
  Linear = 1,
  Srgb = 0,
}

/// A `TryFrom` implemenation for converting any `u8` into a `Colorspace`.
/// `1` maps to `Colorspace::Linear`, and `0` maps to `Colorspace::Srgb`. All
/// other `u8` values are invalid.
impl TryFrom<u8> for Colorspace {
  type Error = Error;

  fn try_from(byte: u8) -> Result<Self, Self::Error> {
    let linear_u8 = Colorspace::Linear as u8;
    let srgb_u8 = Colorspace::Srgb as u8;

    match byte {
      _ if byte == linear_u8 => Ok(Colorspace::Linear),
      _ if byte == srgb_u8 => Ok(Colorspace::Srgb),
      _ => Err(Error::InvalidColorspace(byte)),
    }
  }
}
