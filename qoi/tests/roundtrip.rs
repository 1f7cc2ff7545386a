mod common;

use proptest::prelude::*;
use qoi::{encode_to_vec, Channels, Colorspace, Encoder, ImageMeta, OpKind, Pixel};

// Mixes arbitrary pixels with near-identical ones so that every chunk kind
// shows up, not just RGBA.
fn pixel_strategy() -> impl Strategy<Value = Pixel> {
  prop_oneof![
    any::<[u8; 4]>().prop_map(|[r, g, b, a]| Pixel { r, g, b, a }),
    (0u8..4, 0u8..4, 0u8..4).prop_map(|(r, g, b)| Pixel { r: 100 + r, g: 100 + g, b: 100 + b, a: 255 }),
    (0u8..40, 0u8..12).prop_map(|(g, rb)| Pixel { r: 80 + g + rb, g: 80 + g, b: 90 + g, a: 255 }),
    Just(Pixel { r: 100, g: 100, b: 100, a: 255 }),
    Just(Pixel::ZERO),
  ]
}

fn meta_for(len: usize) -> ImageMeta {
  ImageMeta {
    width: len as u32,
    height: 1,
    channels: Channels::Rgba,
    colorspace: Colorspace::Srgb,
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn prop_decoded_pixels_match_source(pixels in proptest::collection::vec(pixel_strategy(), 0..400)) {
    let meta = meta_for(pixels.len());
    let encoded = encode_to_vec(&pixels, &meta).unwrap();
    let decoded = common::decode(&encoded);

    prop_assert_eq!(decoded.width, meta.width);
    prop_assert_eq!(decoded.channels, 4);
    prop_assert_eq!(decoded.pixels, pixels);
  }

  #[test]
  fn prop_long_runs_round_trip(len in 0usize..500, pixel in pixel_strategy()) {
    let pixels = vec![pixel; len];
    let encoded = encode_to_vec(&pixels, &meta_for(len)).unwrap();

    prop_assert_eq!(common::decode(&encoded).pixels, pixels);
  }

  #[test]
  fn prop_stats_sum_to_totals(pixels in proptest::collection::vec(pixel_strategy(), 0..400)) {
    let mut encoder = Encoder::with_stats(meta_for(pixels.len()));
    let mut chunks = Vec::new();
    encoder.encode_pixels(&pixels, &mut chunks).unwrap();
    encoder.finish(&mut chunks).unwrap();

    let stats = encoder.stats().unwrap();
    let pixel_sum: u64 = OpKind::ALL.iter().map(|kind| stats.pixels(*kind)).sum();
    let bit_sum: u64 = OpKind::ALL.iter().map(|kind| stats.bits(*kind)).sum();

    prop_assert_eq!(stats.total_pixels(), pixels.len() as u64);
    prop_assert_eq!(pixel_sum, stats.total_pixels());
    prop_assert_eq!(bit_sum, stats.total_bits());
    prop_assert_eq!(stats.total_bits(), chunks.len() as u64 * 8);
  }
}
