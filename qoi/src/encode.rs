use std::io;

use crate::container::{write_end_marker, write_header};
use crate::encoder::Encoder;
use crate::error::Error;
use crate::meta::{ImageMeta, QOI_END_LEN, QOI_HEADER_LEN};
use crate::pixel::Pixel;

/// Encodes an image's raw pixel data and `ImageMeta` data into a QOI encoded
/// image.
///
/// The source holds `meta.channels` bytes per pixel in raster order. Three
/// channel pixels are encoded with an alpha of 255. A source holding fewer
/// than `meta.num_pixels()` pixels fails with `Error::UnexpectedEof`.
///
/// This function supports reading and writing to in-memory structures or IO
/// streams by accepting a generic trait bound of `std::io::Read` for the
/// image's pixel data, and `std::io::Write` for the encoded image's
/// destination.
///
/// Note that this function performs frequent reads and writes, so it's
/// recommended to provide a buffered IO implementation such as
/// `std::io::BufReader` and `std::io::BufWriter` for streaming applications.
pub fn encode_image<R: io::Read, W: io::Write>(
  mut reader: R,
  mut writer: W,
  meta: &ImageMeta,
) -> Result<(), Error> {
  write_header(meta, &mut writer)?;

  let mut encoder = Encoder::new(*meta);
  let mut pixel_buf: [u8; 4] = [0, 0, 0, 255];
  let channels = meta.channels as usize;

  for _ in 0..meta.num_pixels() {
    reader.read_exact(&mut pixel_buf[..channels])?;
    encoder.encode_pixel(Pixel::from(pixel_buf), &mut writer)?;
  }

  encoder.finish(&mut writer)?;
  write_end_marker(&mut writer)?;
  writer.flush()?;

  Ok(())
}

/// Encodes already decoded pixels into an in-memory QOI image. The caller is
/// expected to pass `meta.num_pixels()` pixels, this is not checked.
pub fn encode_to_vec(pixels: &[Pixel], meta: &ImageMeta) -> Result<Vec<u8>, Error> {
  let mut dest = Vec::with_capacity(QOI_HEADER_LEN + pixels.len() + QOI_END_LEN);

  write_header(meta, &mut dest)?;

  let mut encoder = Encoder::new(*meta);
  encoder.encode_pixels(pixels, &mut dest)?;
  encoder.finish(&mut dest)?;

  write_end_marker(&mut dest)?;

  Ok(dest)
}
