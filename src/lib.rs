//! Speckle noise textures: a transparent RGBA canvas with a sparse scattering
//! of dark, faintly translucent dots, meant to be layered over artwork as grain.

mod error;
mod writer;

pub use error::{Error, Result};
pub use writer::{read_png, ImageWriter, PngWriter};

use std::path::Path;

use log::debug;
use rand::Rng;
use rand_core::RngCore;

/// RGB of every speckle.
pub const DOT_COLOR: [u8; 3] = [50, 40, 30];
/// Lowest alpha a speckle can be drawn with.
pub const MIN_ALPHA: u8 = 10;
/// A pixel becomes a speckle when its uniform draw is strictly above this.
pub const SPECKLE_THRESHOLD: f64 = 0.9;
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
pub const DEFAULT_OUTPUT_PATH: &str = "assets/noise.png";

const CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseParams {
    width: u32,
    height: u32,
    opacity: u8,
}

impl NoiseParams {
    /// `opacity` is the inclusive upper bound of speckle alpha and may not be
    /// lower than [`MIN_ALPHA`].
    pub fn new(width: u32, height: u32, opacity: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyDimensions { width, height });
        }
        if opacity < MIN_ALPHA {
            return Err(Error::OpacityBelowMinimum { opacity });
        }
        if buffer_len(width, height).is_none() {
            return Err(Error::TooLarge { width, height });
        }

        Ok(Self {
            width,
            height,
            opacity,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            opacity: 30,
        }
    }
}

fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// Row-major 8-bit RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl NoiseImage {
    fn transparent(width: u32, height: u32, len: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wraps raw RGBA bytes, returning `None` when the length does not match
    /// the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if buffer_len(width, height)? != data.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let p = &self.data[i..i + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    fn set_pixel(&mut self, index: usize, rgba: [u8; 4]) {
        let i = index * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Number of pixels that are not fully transparent.
    pub fn speckle_count(&self) -> usize {
        self.pixels().filter(|p| p[3] != 0).count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Fills a `width x height` canvas in row-major order. Each pixel draws a
/// uniform `f64`; above [`SPECKLE_THRESHOLD`] it becomes [`DOT_COLOR`] with an
/// alpha drawn from `MIN_ALPHA..=opacity`, otherwise it stays transparent.
pub fn generate<R: RngCore>(params: &NoiseParams, rng: &mut R) -> NoiseImage {
    let NoiseParams {
        width,
        height,
        opacity,
    } = *params;

    // NoiseParams::new has already rejected sizes that overflow.
    let len = width as usize * height as usize * CHANNELS;
    let mut image = NoiseImage::transparent(width, height, len);

    let [r, g, b] = DOT_COLOR;
    for index in 0..image.pixel_count() {
        if rng.gen::<f64>() > SPECKLE_THRESHOLD {
            let alpha = rng.gen_range(MIN_ALPHA..=opacity);
            image.set_pixel(index, [r, g, b, alpha]);
        }
    }

    debug!(
        "generated {}x{} texture with {} speckles (opacity {})",
        width,
        height,
        image.speckle_count(),
        opacity
    );

    image
}

pub struct NoiseGenerator<R: RngCore> {
    params: NoiseParams,
    rng: R,
}

impl<R: RngCore> NoiseGenerator<R> {
    pub fn new(params: NoiseParams, rng: R) -> Self {
        Self { params, rng }
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    pub fn generate(&mut self) -> NoiseImage {
        generate(&self.params, &mut self.rng)
    }

    /// Generates a texture and hands it straight to `writer`.
    pub fn write_to<W: ImageWriter>(&mut self, writer: &W, path: &Path) -> Result<()> {
        let image = self.generate();
        writer.write(&image, path)
    }
}
