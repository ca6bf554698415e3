use std::io;

use thiserror::Error;

use crate::MIN_ALPHA;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("opacity {opacity} is below the minimum speckle alpha of {}", MIN_ALPHA)]
    OpacityBelowMinimum { opacity: u8 },

    #[error("a {width}x{height} RGBA buffer does not fit in memory")]
    TooLarge { width: u32, height: u32 },

    #[error("expected an 8-bit RGBA png, found {color:?} at {depth:?}")]
    UnsupportedFormat {
        color: png::ColorType,
        depth: png::BitDepth,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("png decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
}
