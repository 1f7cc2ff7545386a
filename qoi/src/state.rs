use crate::meta::{QOI_CACHE_LEN, QOI_MAX_RUN};
use crate::pixel::Pixel;

// A collection of stateful properties maintained while encoding a single
// image.
pub struct State {
  // A cache of previously seen pixels, indexed by their hash. Slots hold
  // either `Pixel::ZERO` or the latest pixel that hashed to them.
  pub cache: [Pixel; QOI_CACHE_LEN],
  // The previously encoded pixel.
  pub prev_pixel: Pixel,
  // Length of the current run (Op::Run) (if any), always below
  // `QOI_MAX_RUN` between pixels.
  pub run_count: u8,
}

impl State {
  pub fn new() -> Self {
    Self {
      cache: [Pixel::ZERO; QOI_CACHE_LEN],
      prev_pixel: Pixel::default(),
      run_count: 0,
    }
  }

  // Checks if the given pixel matches the cached pixel at the computed index
  // and returns the index. If there is no match, the given pixel is inserted,
  // overwriting the pixel that was previously cached, and the index is not
  // returned.
  pub fn cache_match_or_replace(&mut self, pixel: Pixel) -> Option<u8> {
    let index = pixel.qoi_hash();
    let slot = &mut self.cache[index as usize];

    if *slot == pixel {
      return Some(index);
    }

    *slot = pixel;

    None
  }

  // Extends the current run by one pixel. Returns the run length when the
  // run hit `QOI_MAX_RUN` and has to be flushed right away.
  pub fn extend_run(&mut self) -> Option<u8> {
    self.run_count += 1;

    if self.run_count == QOI_MAX_RUN {
      return self.take_run();
    }

    None
  }

  // Ends the current run, returning its length if there was one.
  pub fn take_run(&mut self) -> Option<u8> {
    match std::mem::take(&mut self.run_count) {
      0 => None,
      run_count => Some(run_count),
    }
  }
}
