//! This crate implements an encoder for the
//! [QOI image format](https://qoiformat.org).
//!
//! Pixels are turned into a stream of variable length "chunks", each of which
//! either refers back to previously seen pixel data (a run of the previous
//! pixel, or a slot of a 64 entry cache of recently seen pixels), or encodes
//! a new pixel as a small difference from the previous one or verbatim.
//!
//! The primary export is the `Encoder`, which owns the state of a single
//! chunk stream and can optionally track `Stats` about the chunks it emits.
//! The header and end marker surrounding the chunk stream are written with
//! `write_header` and `write_end_marker`. For the common case of encoding a
//! whole image in one go, `encode_image` and `encode_to_vec` do all of the
//! above.
//!
//! To keep this crate simple, it does not decode QOI images, nor any other
//! image format. To encode an image, it will first need to be decoded using
//! another method. From there, the decoded pixel data can then be encoded.
//!
//! # In-memory encode example
//!
//! ```rust
//! use qoi::{encode_image, Channels, Colorspace, ImageMeta};
//!
//! // A 1x1 representation of an image's pixel data made up of an opaque black pixel.
//! let image_source = vec![0, 0, 0, 255];
//!
//! // Buffer to write the encoded image to.
//! let mut image_destination = Vec::new();
//!
//! // Metadata describing the image to be encoded.
//! let image_meta = ImageMeta {
//!   width: 1,
//!   height: 1,
//!   channels: Channels::Rgba,
//!   colorspace: Colorspace::Srgb,
//! };
//!
//! match encode_image(&mut image_source.as_slice(), &mut image_destination, &image_meta) {
//!   Ok(()) => {
//!     // Header, a single run chunk, and the end marker.
//!     assert_eq!(image_destination.len(), 14 + 1 + 8);
//!   }
//!   Err(e) => {
//!     // See `error.rs` for all possible errors.
//!     panic!("{}", e);
//!   }
//! }
//! ```
//!
//! # Statistics example
//!
//! ```rust
//! use qoi::{Channels, Colorspace, Encoder, ImageMeta, OpKind, Pixel};
//!
//! let meta = ImageMeta { width: 4, height: 1, channels: Channels::Rgb, colorspace: Colorspace::Srgb };
//! let pixels = [Pixel::from([200, 10, 10]); 4];
//!
//! let mut encoder = Encoder::with_stats(meta);
//! let mut chunks = Vec::new();
//! encoder.encode_pixels(&pixels, &mut chunks).unwrap();
//! encoder.finish(&mut chunks).unwrap();
//!
//! let stats = encoder.stats().unwrap();
//! assert_eq!(stats.pixels(OpKind::Rgb), 1);
//! assert_eq!(stats.pixels(OpKind::Run), 3);
//! assert_eq!(stats.bits_per_pixel(), 10.0);
//! ```
//!

pub use crate::container::{write_end_marker, write_header};
pub use crate::encode::{encode_image, encode_to_vec};
pub use crate::encoder::Encoder;
pub use crate::error::Error;
pub use crate::meta::{
  Channels, Colorspace, ImageMeta, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_END_LEN, QOI_HEADER_LEN,
  QOI_MAX_RUN,
};
pub use crate::op::{Op, OpKind};
pub use crate::pixel::Pixel;
pub use crate::stats::Stats;

mod container;
mod encode;
mod encoder;
mod error;
mod meta;
mod op;
mod pixel;
mod state;
mod stats;
