//! A minimal QOI decoder used to check that encoded images reproduce their
//! source pixels. Panics on malformed input.

use qoi::{Pixel, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_HEADER_LEN};

#[derive(Debug, PartialEq)]
pub struct Decoded {
  pub width: u32,
  pub height: u32,
  pub channels: u8,
  pub colorspace: u8,
  pub pixels: Vec<Pixel>,
}

pub fn decode(bytes: &[u8]) -> Decoded {
  assert!(bytes.len() >= QOI_HEADER_LEN + QOI_BYTES_END.len(), "image too short");
  assert_eq!(&bytes[..4], QOI_BYTES_MAGIC);
  assert_eq!(&bytes[bytes.len() - QOI_BYTES_END.len()..], &QOI_BYTES_END);

  let width = u32::from_be_bytes(bytes[4..8].try_into().unwrap());
  let height = u32::from_be_bytes(bytes[8..12].try_into().unwrap());
  let num_pixels = width as usize * height as usize;

  let mut chunks = bytes[QOI_HEADER_LEN..bytes.len() - QOI_BYTES_END.len()].iter().copied();
  let mut next = || chunks.next().expect("chunk stream ended early");

  let mut cache = [Pixel::ZERO; 64];
  let mut prev = Pixel::default();
  let mut pixels = Vec::with_capacity(num_pixels);

  while pixels.len() < num_pixels {
    let byte = next();

    let pixel = match byte {
      0xfe => Pixel { r: next(), g: next(), b: next(), a: prev.a },
      0xff => Pixel { r: next(), g: next(), b: next(), a: next() },
      _ => match byte & 0xc0 {
        0x00 => cache[byte as usize],
        0x40 => Pixel {
          r: prev.r.wrapping_add((byte >> 4 & 0x03).wrapping_sub(2)),
          g: prev.g.wrapping_add((byte >> 2 & 0x03).wrapping_sub(2)),
          b: prev.b.wrapping_add((byte & 0x03).wrapping_sub(2)),
          a: prev.a,
        },
        0x80 => {
          let second = next();
          let dg = (byte & 0x3f).wrapping_sub(32);
          let dr = (second >> 4).wrapping_sub(8).wrapping_add(dg);
          let db = (second & 0x0f).wrapping_sub(8).wrapping_add(dg);

          Pixel {
            r: prev.r.wrapping_add(dr),
            g: prev.g.wrapping_add(dg),
            b: prev.b.wrapping_add(db),
            a: prev.a,
          }
        }
        _ => {
          let run = (byte & 0x3f) as usize + 1;
          pixels.extend(std::iter::repeat(prev).take(run));
          continue;
        }
      },
    };

    cache[pixel.qoi_hash() as usize] = pixel;
    pixels.push(pixel);
    prev = pixel;
  }

  assert!(chunks.next().is_none(), "trailing chunks after the last pixel");

  Decoded {
    width,
    height,
    channels: bytes[12],
    colorspace: bytes[13],
    pixels,
  }
}
