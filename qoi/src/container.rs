use std::io;

use crate::error::Error;
use crate::meta::{ImageMeta, QOI_BYTES_END, QOI_BYTES_MAGIC};

/// Writes the 14 byte QOI header: the `qoif` magic, big-endian width and
/// height, then the channel count and colorspace bytes.
pub fn write_header<W: io::Write>(meta: &ImageMeta, mut writer: W) -> Result<(), Error> {
  writer.write_all(QOI_BYTES_MAGIC)?;
  writer.write_all(&meta.width.to_be_bytes())?;
  writer.write_all(&meta.height.to_be_bytes())?;
  writer.write_all(&[meta.channels as u8, meta.colorspace as u8])?;
  Ok(())
}

/// Writes the 8 byte end marker closing a QOI image.
pub fn write_end_marker<W: io::Write>(mut writer: W) -> Result<(), Error> {
  writer.write_all(&QOI_BYTES_END)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::meta::{Channels, Colorspace, QOI_HEADER_LEN};

  #[test]
  fn test_encoding_image_header() {
    let mut dest = Vec::new();
    let meta = ImageMeta {
      width: 0x0102_0304,
      height: 640,
      channels: Channels::Rgb,
      colorspace: Colorspace::Linear,
    };

    write_header(&meta, &mut dest).expect("Failed to write header");

    assert_eq!(dest.len(), QOI_HEADER_LEN);
    assert_eq!(
      dest,
      vec![b'q', b'o', b'i', b'f', 1, 2, 3, 4, 0, 0, 2, 128, 3, 1]
    );
  }

  #[test]
  fn test_encoding_end_marker() {
    let mut dest = Vec::new();
    write_end_marker(&mut dest).expect("Failed to write end marker");
    assert_eq!(dest, vec![0, 0, 0, 0, 0, 0, 0, 1]);
  }
}
