use crate::meta::QOI_CACHE_LEN;

/// A single RGBA pixel. Three channel images are handed to the encoder with
/// an alpha of 255.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pixel {
  /// Red channel value.
  pub r: u8,
  /// Green channel value.
  pub g: u8,
  /// Blue channel value.
  pub b: u8,
  /// Alpha channel value.
  pub a: u8,
}

impl Default for Pixel {
  fn default() -> Self {
    Self { r: 0, g: 0, b: 0, a: 255 }
  }
}

impl From<[u8; 4]> for Pixel {
  fn from([r, g, b, a]: [u8; 4]) -> Self {
    Self { r, g, b, a }
  }
}

impl From<[u8; 3]> for Pixel {
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b, a: 255 }
  }
}

impl Pixel {
  /// The value every cache slot holds before it is first written.
  pub const ZERO: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

  // Signed, wrapping difference of each channel from `prev` to `self`.
  pub(crate) fn diff(&self, prev: &Pixel) -> PixelDiff {
    PixelDiff {
      r: self.r.wrapping_sub(prev.r) as i8,
      g: self.g.wrapping_sub(prev.g) as i8,
      b: self.b.wrapping_sub(prev.b) as i8,
      a: self.a.wrapping_sub(prev.a) as i8,
    }
  }

  /// QOI color hash function, not implemented via the `Hash` trait since the
  /// value is a cache slot rather than a general purpose hash. Wrapping 8-bit
  /// arithmetic keeps the low six bits identical to full width arithmetic.
  pub fn qoi_hash(&self) -> u8 {
    let sum = self
      .r
      .wrapping_mul(3)
      .wrapping_add(self.g.wrapping_mul(5))
      .wrapping_add(self.b.wrapping_mul(7))
      .wrapping_add(self.a.wrapping_mul(11));

    sum % QOI_CACHE_LEN as u8
  }
}

// Per channel difference between two pixels, each channel interpreted as a
// signed delta in [-128, 127].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PixelDiff {
  pub r: i8,
  pub g: i8,
  pub b: i8,
  pub a: i8,
}

impl PixelDiff {
  // Red, green, and blue deltas with a bias of +2 when all three lie in
  // [-2, 1] and alpha is unchanged.
  pub fn as_small(&self) -> Option<(u8, u8, u8)> {
    let range = -2..=1;

    if self.a != 0
      || !range.contains(&self.r)
      || !range.contains(&self.g)
      || !range.contains(&self.b)
    {
      return None;
    }

    Some((
      (self.r + 2) as u8,
      (self.g + 2) as u8,
      (self.b + 2) as u8,
    ))
  }

  // Green delta with a bias of +32, and the red-green and blue-green deltas
  // with a bias of +8, when they fit and alpha is unchanged.
  pub fn as_luma(&self) -> Option<(u8, u8, u8)> {
    if self.a != 0 || !(-32..=31).contains(&self.g) {
      return None;
    }

    // Widened so that e.g. -128 - 31 can not overflow.
    let dr_dg = i16::from(self.r) - i16::from(self.g);
    let db_dg = i16::from(self.b) - i16::from(self.g);
    let range = -8..=7;

    if !range.contains(&dr_dg) || !range.contains(&db_dg) {
      return None;
    }

    Some((
      (self.g + 32) as u8,
      (dr_dg + 8) as u8,
      (db_dg + 8) as u8,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hash() {
    assert_eq!(Pixel { r: 101, g: 102, b: 103, a: 104 }.qoi_hash(), 54);
    assert_eq!(Pixel::default().qoi_hash(), 53); // 255 * 11 = 2805 % 64
    assert_eq!(Pixel::ZERO.qoi_hash(), 0);
  }

  #[test]
  fn test_hash_matches_full_width_arithmetic() {
    for value in [0u8, 1, 17, 64, 127, 128, 200, 255] {
      let pixel = Pixel { r: value, g: value ^ 0x5a, b: value.wrapping_mul(3), a: !value };
      let wide = (pixel.r as usize * 3 + pixel.g as usize * 5 + pixel.b as usize * 7 + pixel.a as usize * 11) % 64;

      assert_eq!(pixel.qoi_hash() as usize, wide);
    }
  }

  #[test]
  fn test_diff_wraps() {
    let prev = Pixel { r: 255, g: 0, b: 10, a: 255 };
    let pixel = Pixel { r: 0, g: 255, b: 10, a: 255 };

    assert_eq!(pixel.diff(&prev), PixelDiff { r: 1, g: -1, b: 0, a: 0 });
  }

  #[test]
  fn test_small_diff_bounds() {
    let prev = Pixel { r: 100, g: 100, b: 100, a: 255 };

    let pixel = Pixel { r: 101, g: 98, b: 101, a: 255 };
    assert_eq!(pixel.diff(&prev).as_small(), Some((3, 0, 3)));

    let pixel = Pixel { r: 102, g: 100, b: 100, a: 255 };
    assert_eq!(pixel.diff(&prev).as_small(), None);

    let pixel = Pixel { r: 100, g: 100, b: 100, a: 254 };
    assert_eq!(pixel.diff(&prev).as_small(), None);
  }

  #[test]
  fn test_luma_bounds() {
    let prev = Pixel { r: 100, g: 100, b: 100, a: 255 };

    // dg = 31, dr - dg = 7, db - dg = -8
    let pixel = Pixel { r: 138, g: 131, b: 123, a: 255 };
    assert_eq!(pixel.diff(&prev).as_luma(), Some((63, 15, 0)));

    // dg = -32, dr - dg = 0, db - dg = 0
    let pixel = Pixel { r: 68, g: 68, b: 68, a: 255 };
    assert_eq!(pixel.diff(&prev).as_luma(), Some((0, 8, 8)));

    // dg = 32
    let pixel = Pixel { r: 132, g: 132, b: 132, a: 255 };
    assert_eq!(pixel.diff(&prev).as_luma(), None);

    // dr - dg = 8
    let pixel = Pixel { r: 108, g: 100, b: 100, a: 255 };
    assert_eq!(pixel.diff(&prev).as_luma(), None);
  }

  #[test]
  fn test_luma_extreme_deltas_do_not_overflow() {
    let prev = Pixel { r: 128, g: 0, b: 128, a: 255 };
    let pixel = Pixel { r: 0, g: 31, b: 0, a: 255 };

    assert_eq!(pixel.diff(&prev).as_luma(), None);
  }
}
