use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;

use crate::{Error, NoiseImage, Result};

/// Persists a finished texture. The generator only ever talks to this trait,
/// so tests can swap in a writer that never touches the disk.
pub trait ImageWriter {
    fn write(&self, image: &NoiseImage, path: &Path) -> Result<()>;
}

/// 8-bit RGBA png. The parent directory must already exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngWriter;

impl ImageWriter for PngWriter {
    fn write(&self, image: &NoiseImage, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let file_writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(file_writer, image.width(), image.height());

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;

        png_writer.write_image_data(image.as_bytes())?;
        png_writer.finish()?;

        info!(
            "wrote {}x{} texture to {}",
            image.width(),
            image.height(),
            path.display()
        );

        Ok(())
    }
}

/// Decodes a png written by [`PngWriter`]. Anything other than 8-bit RGBA is
/// rejected rather than converted.
pub fn read_png(path: &Path) -> Result<NoiseImage> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;

    if frame.color_type != png::ColorType::Rgba || frame.bit_depth != png::BitDepth::Eight {
        return Err(Error::UnsupportedFormat {
            color: frame.color_type,
            depth: frame.bit_depth,
        });
    }

    buf.truncate(frame.buffer_size());

    // A well-formed RGBA8 frame is always exactly width * height * 4 bytes.
    NoiseImage::from_raw(frame.width, frame.height, buf).ok_or(Error::UnsupportedFormat {
        color: frame.color_type,
        depth: frame.bit_depth,
    })
}
