use std::error;
use std::fmt;
use std::io;

/// An enumeration of all error values this crate may produce.
pub enum Error {
  /// Attempted to encode more pixels after the encoder was finished.
  EncoderFinished,
  /// A previous write to the image destination failed, leaving the chunk
  /// stream incomplete. The encoder refuses any further work.
  EncoderPoisoned,
  /// Failed to derive a supported channel count, expected 3 or 4.
  InvalidChannels(u8),
  /// Failed to derive a supported colorspace, expected 0 or 1.
  InvalidColorspace(u8),
  /// Any `std::io::Error` that occurs during encoding. Typically these will
  /// arise from problems with reading an image source or writing to an image
  /// destination.
  IoError(io::Error),
  /// Unexpectedly reached the end of an image source before encoding was
  /// completed.
  UnexpectedEof,
}

impl From<io::Error> for Error {
  fn from(io_err: io::Error) -> Self {
    match io_err.kind() {
      io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
      _ => Error::IoError(io_err),
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::EncoderFinished => {
        write!(f, "encoder already finished, no more pixels can be encoded")
      }
      Error::EncoderPoisoned => {
        write!(f, "encoder is unusable after a failed write, the encoded image is incomplete")
      }
      Error::InvalidChannels(byte) => {
        write!(f, "invalid channel count {}, expected 3 for RGB or 4 for RGBA", byte)
      }
      Error::InvalidColorspace(byte) => {
        write!(f, "invalid image colorspace {}, expected 0 for sRGB or 1 for linear", byte)
      }
      Error::IoError(io_err) => {
        write!(f, "{}", io_err)
      }
      Error::UnexpectedEof => {
        write!(f, "unexpectedly reached end of image source before encoding was completed")
      }
    }
  }
}

impl fmt::Debug for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self)
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Error::IoError(io_err) => Some(io_err),
      _ => None,
    }
  }
}

#[cfg(test)]
impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Error::EncoderFinished, Error::EncoderFinished) => true,
      (Error::EncoderPoisoned, Error::EncoderPoisoned) => true,
      (Error::InvalidChannels(a), Error::InvalidChannels(b)) => a == b,
      (Error::InvalidColorspace(a), Error::InvalidColorspace(b)) => a == b,
      (Error::IoError(..), Error::IoError(..)) => true,
      (Error::UnexpectedEof, Error::UnexpectedEof) => true,
      _ => false,
    }
  }
}
