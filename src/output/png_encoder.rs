//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Unlike PPM, PNG keeps the alpha
//! channel: pixels are written as straight-alpha RGBA8.

use crate::error::Result;
use crate::layer::Layer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// PNG encoder for layer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a layer as PNG to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or writing fails.
    pub fn write<W: Write>(layer: &Layer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, layer.width(), layer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&layer.to_rgba8())?;
        writer.finish()?;

        Ok(())
    }

    /// Write a layer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(layer: &Layer, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            width = layer.width(),
            height = layer.height(),
            "writing PNG"
        );

        let file = File::create(path)?;
        Self::write(layer, BufWriter::new(file))
    }

    /// Encode a layer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(layer: &Layer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(layer, &mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_png_to_bytes() {
        let mut layer = Layer::new(10, 10).expect("layer creation should succeed");
        layer.fill(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&layer).expect("encoding should succeed");
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_write_to_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("layer.png");
        let layer = Layer::new(3, 2).expect("layer creation should succeed");

        PngEncoder::write_to_file(&layer, &path).expect("write should succeed");

        let written = std::fs::read(&path).expect("file should exist");
        assert_eq!(&written[1..4], b"PNG");
    }
}
