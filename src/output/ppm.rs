//! PPM (Portable Pixmap) codec.
//!
//! Layers are written as 8-bit P3 (ASCII) or P6 (binary) images. Alpha is applied to
//! every pixel before quantization, so transparent regions come out black.
//!
//! The decoder accepts any whitespace and `#` comments between header fields, then
//! exactly one whitespace byte before the raster. Samples are normalized by `maxval`
//! and every decoded pixel is opaque.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::layer::Layer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Largest `maxval` accepted for ASCII rasters.
const MAX_ASCII_MAXVAL: u32 = 65535;

/// Largest `maxval` accepted for binary rasters (one byte per sample).
const MAX_BINARY_MAXVAL: u32 = 255;

/// PPM variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PpmFormat {
    /// `P3`: decimal samples separated by whitespace.
    Ascii,
    /// `P6`: raw bytes, three per pixel.
    #[default]
    Binary,
}

impl PpmFormat {
    /// The two-character magic tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ascii => "P3",
            Self::Binary => "P6",
        }
    }

    /// Look up a format by its magic tag.
    #[must_use]
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"P3" => Some(Self::Ascii),
            b"P6" => Some(Self::Binary),
            _ => None,
        }
    }

    const fn max_maxval(self) -> u32 {
        match self {
            Self::Ascii => MAX_ASCII_MAXVAL,
            Self::Binary => MAX_BINARY_MAXVAL,
        }
    }
}

// ============================================================================
// Encoder
// ============================================================================

/// PPM encoder for layer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a layer as PPM to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(layer: &Layer, mut writer: W, format: PpmFormat) -> Result<()> {
        write!(
            writer,
            "{}\n{} {}\n255\n",
            format.tag(),
            layer.width(),
            layer.height()
        )?;

        match format {
            PpmFormat::Ascii => {
                for px in layer.pixels() {
                    let [r, g, b] = px.apply_alpha().to_rgb8();
                    writeln!(writer, "{r} {g} {b}")?;
                }
            }
            PpmFormat::Binary => writer.write_all(&layer.to_rgb8())?,
        }

        writer.flush()?;
        Ok(())
    }

    /// Encode a layer to PPM bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_bytes(layer: &Layer, format: PpmFormat) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(16 + layer.pixel_count() * 3);
        Self::write(layer, &mut buffer, format)?;
        Ok(buffer)
    }

    /// Write a layer to a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(layer: &Layer, path: P, format: PpmFormat) -> Result<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            format = format.tag(),
            width = layer.width(),
            height = layer.height(),
            "writing PPM"
        );

        let file = File::create(path)?;
        Self::write(layer, BufWriter::new(file), format)
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Parsed PPM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    format: PpmFormat,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Byte cursor over a PPM stream.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and `#`-to-end-of-line comments.
    fn skip_separators(&mut self) {
        loop {
            match self.peek() {
                Some(b'#') => {
                    while self.peek().is_some_and(|c| c != b'\n') {
                        self.pos += 1;
                    }
                }
                Some(c) if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Next run of non-whitespace bytes, possibly empty.
    fn token(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_ascii_whitespace() && c != b'#')
        {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    fn header_uint(&mut self, field: &str) -> Result<u32> {
        self.skip_separators();
        let token = self.token();
        parse_decimal(token).ok_or_else(|| {
            Error::MalformedHeader(format!(
                "invalid {field}: {:?}",
                String::from_utf8_lossy(token)
            ))
        })
    }

    fn header(&mut self, expected: Option<PpmFormat>) -> Result<Header> {
        self.skip_whitespace();
        let tag_end = (self.pos + 2).min(self.bytes.len());
        let tag = &self.bytes[self.pos..tag_end];
        self.pos = tag_end;

        let found = PpmFormat::from_tag(tag);
        let format = match (expected, found) {
            (Some(want), Some(got)) if want == got => got,
            (None, Some(got)) => got,
            (want, _) => {
                return Err(Error::FormatMismatch {
                    expected: want.map_or("P3 or P6", PpmFormat::tag),
                    found: String::from_utf8_lossy(tag).into_owned(),
                });
            }
        };

        let width = self.header_uint("width")?;
        let height = self.header_uint("height")?;
        let maxval = self.header_uint("maxval")?;

        if maxval == 0 || maxval > format.max_maxval() {
            return Err(Error::MalformedHeader(format!(
                "maxval {maxval} out of range for {}",
                format.tag()
            )));
        }

        // Exactly one whitespace byte separates the header from the raster
        match self.peek() {
            Some(c) if c.is_ascii_whitespace() => self.pos += 1,
            _ => {
                return Err(Error::MalformedHeader(
                    "missing whitespace after maxval".to_string(),
                ));
            }
        }

        Ok(Header {
            format,
            width,
            height,
            maxval,
        })
    }
}

/// Parse an unsigned decimal integer made of ASCII digits only.
fn parse_decimal(token: &[u8]) -> Option<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// PPM decoder for layer input.
pub struct PpmDecoder;

impl PpmDecoder {
    /// Decode a PPM image of the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] if the tag differs from `format`,
    /// [`Error::MalformedHeader`] for an unreadable header, [`Error::UnexpectedEof`] if
    /// the raster is short, [`Error::InvalidSample`] for a bad sample, and
    /// [`Error::InvalidDimensions`] for a zero-sized image.
    pub fn decode(bytes: &[u8], format: PpmFormat) -> Result<Layer> {
        Self::decode_inner(bytes, Some(format))
    }

    /// Decode a P3 or P6 image, detecting the variant from its tag.
    ///
    /// # Errors
    ///
    /// See [`PpmDecoder::decode`].
    pub fn decode_any(bytes: &[u8]) -> Result<Layer> {
        Self::decode_inner(bytes, None)
    }

    /// Read a PPM file of the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to decode.
    pub fn read_from_file<P: AsRef<Path>>(path: P, format: PpmFormat) -> Result<Layer> {
        let path = path.as_ref();
        debug!(path = %path.display(), format = format.tag(), "reading PPM");

        let bytes = fs::read(path)?;
        Self::decode(&bytes, format)
    }

    fn decode_inner(bytes: &[u8], format: Option<PpmFormat>) -> Result<Layer> {
        Self::try_decode(bytes, format).map_err(|err| {
            warn!(error = %err, "PPM decode failed");
            err
        })
    }

    fn try_decode(bytes: &[u8], format: Option<PpmFormat>) -> Result<Layer> {
        let mut reader = Reader::new(bytes);
        let header = reader.header(format)?;
        let size = Size::new(header.width, header.height);
        if size.is_empty() {
            return Err(Error::InvalidDimensions {
                width: header.width,
                height: header.height,
            });
        }

        let expected = size.area().checked_mul(3).ok_or(Error::Allocation {
            width: header.width,
            height: header.height,
        })?;

        let samples = match header.format {
            PpmFormat::Ascii => read_ascii_samples(&mut reader, expected)?,
            PpmFormat::Binary => read_binary_samples(&reader, expected)?,
        };

        if let Some(&bad) = samples.iter().find(|&&s| s > header.maxval) {
            return Err(Error::InvalidSample(format!(
                "{bad} exceeds maxval {}",
                header.maxval
            )));
        }

        let scale = 1.0 / f64::from(header.maxval);
        let pixels = samples
            .chunks_exact(3)
            .map(|rgb| {
                Rgba::opaque(
                    f64::from(rgb[0]) * scale,
                    f64::from(rgb[1]) * scale,
                    f64::from(rgb[2]) * scale,
                )
            })
            .collect();

        debug!(
            format = header.format.tag(),
            width = header.width,
            height = header.height,
            maxval = header.maxval,
            "decoded PPM"
        );
        Layer::from_pixels(size, pixels)
    }
}

fn read_ascii_samples(reader: &mut Reader<'_>, expected: usize) -> Result<Vec<u32>> {
    let mut samples = Vec::new();
    while samples.len() < expected {
        reader.skip_whitespace();
        let token = reader.token();
        if token.is_empty() {
            if reader.peek().is_none() {
                return Err(Error::UnexpectedEof {
                    expected,
                    found: samples.len(),
                });
            }
            // A stray '#' inside the raster
            return Err(Error::InvalidSample(
                String::from_utf8_lossy(reader.rest()).chars().take(16).collect(),
            ));
        }
        let value = parse_decimal(token)
            .ok_or_else(|| Error::InvalidSample(String::from_utf8_lossy(token).into_owned()))?;
        samples.push(value);
    }
    Ok(samples)
}

fn read_binary_samples(reader: &Reader<'_>, expected: usize) -> Result<Vec<u32>> {
    let raster = reader.rest();
    if raster.len() < expected {
        return Err(Error::UnexpectedEof {
            expected,
            found: raster.len(),
        });
    }
    Ok(raster[..expected].iter().map(|&b| u32::from(b)).collect())
}

// ============================================================================
// Layer conveniences
// ============================================================================

impl Layer {
    /// Save as an ASCII (P3) PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_p3<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PpmEncoder::write_to_file(self, path, PpmFormat::Ascii)
    }

    /// Save as a binary (P6) PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_p6<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PpmEncoder::write_to_file(self, path, PpmFormat::Binary)
    }

    /// Load an ASCII (P3) PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid P3 image.
    pub fn load_p3<P: AsRef<Path>>(path: P) -> Result<Self> {
        PpmDecoder::read_from_file(path, PpmFormat::Ascii)
    }

    /// Load a binary (P6) PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid P6 image.
    pub fn load_p6<P: AsRef<Path>>(path: P) -> Result<Self> {
        PpmDecoder::read_from_file(path, PpmFormat::Binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use approx::assert_relative_eq;

    fn sample_layer() -> Layer {
        Layer::from_pixels(
            Size::new(2, 1),
            vec![Rgba::RED, Rgba::new(1.0, 1.0, 1.0, 0.5)],
        )
        .expect("layer creation should succeed")
    }

    #[test]
    fn test_encode_p3_exact() {
        let bytes = PpmEncoder::to_bytes(&sample_layer(), PpmFormat::Ascii)
            .expect("encoding should succeed");

        assert_eq!(bytes, b"P3\n2 1\n255\n255 0 0\n128 128 128\n");
    }

    #[test]
    fn test_encode_p6_exact() {
        let bytes = PpmEncoder::to_bytes(&sample_layer(), PpmFormat::Binary)
            .expect("encoding should succeed");

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 128, 128, 128]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encode_transparent_is_black() {
        let layer = Layer::new(1, 1).expect("layer creation should succeed");
        let bytes = PpmEncoder::to_bytes(&layer, PpmFormat::Ascii).expect("encoding should succeed");
        assert_eq!(bytes, b"P3\n1 1\n255\n0 0 0\n");
    }

    #[test]
    fn test_decode_p3_with_comments() {
        let data = b"P3\n# created by hand\n2 # width\n1\n# maxval next\n255\n255 0 0\n0 0 255\n";
        let layer = PpmDecoder::decode(data, PpmFormat::Ascii).expect("decoding should succeed");

        assert_eq!(layer.size(), Size::new(2, 1));
        assert_eq!(layer.get_pixel(Point::new(0, 0)), Rgba::RED);
        assert_eq!(layer.get_pixel(Point::new(1, 0)), Rgba::BLUE);
    }

    #[test]
    fn test_decode_normalizes_by_maxval() {
        let data = b"P3 1 1 4\n2 4 0";
        let layer = PpmDecoder::decode(data, PpmFormat::Ascii).expect("decoding should succeed");

        let px = layer.get_pixel(Point::ORIGIN);
        assert_relative_eq!(px.r, 0.5);
        assert_relative_eq!(px.g, 1.0);
        assert_relative_eq!(px.a, 1.0);
    }

    #[test]
    fn test_decode_p6_single_whitespace_before_raster() {
        // Raster starts with a byte that looks like whitespace (0x0A)
        let mut data = b"P6\n1 1\n255\n".to_vec();
        data.extend_from_slice(&[10, 20, 30]);

        let layer = PpmDecoder::decode(&data, PpmFormat::Binary).expect("decoding should succeed");
        let [r, g, b, a] = layer.get_pixel(Point::ORIGIN).to_rgba8();
        assert_eq!([r, g, b, a], [10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_format_mismatch() {
        let p3 = PpmEncoder::to_bytes(&sample_layer(), PpmFormat::Ascii).expect("encoding should succeed");

        let err = PpmDecoder::decode(&p3, PpmFormat::Binary).unwrap_err();
        assert!(matches!(
            err,
            Error::FormatMismatch { expected: "P6", ref found } if found == "P3"
        ));

        let err = PpmDecoder::decode_any(b"P5\n1 1\n255\n\0").unwrap_err();
        assert!(matches!(err, Error::FormatMismatch { .. }));
    }

    #[test]
    fn test_decode_malformed_header() {
        assert!(matches!(
            PpmDecoder::decode(b"P3\nabc 1\n255\n", PpmFormat::Ascii),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            PpmDecoder::decode(b"P6\n1 1\n", PpmFormat::Binary),
            Err(Error::MalformedHeader(_))
        ));
        // No whitespace after maxval
        assert!(matches!(
            PpmDecoder::decode(b"P6\n1 1\n255", PpmFormat::Binary),
            Err(Error::MalformedHeader(_))
        ));
        // 16-bit binary rasters are not supported
        assert!(matches!(
            PpmDecoder::decode(b"P6\n1 1\n65535\n\0\0\0\0\0\0", PpmFormat::Binary),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            PpmDecoder::decode(b"P3\n1 1\n0\n0 0 0\n", PpmFormat::Ascii),
            Err(Error::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_decode_short_raster() {
        let err = PpmDecoder::decode(b"P6\n2 1\n255\n\x01\x02\x03\x04", PpmFormat::Binary)
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { expected: 6, found: 4 }));

        let err = PpmDecoder::decode(b"P3\n2 1\n255\n1 2 3 4\n", PpmFormat::Ascii).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { expected: 6, found: 4 }));
    }

    #[test]
    fn test_decode_invalid_samples() {
        assert!(matches!(
            PpmDecoder::decode(b"P3\n1 1\n255\n1 x 3\n", PpmFormat::Ascii),
            Err(Error::InvalidSample(_))
        ));
        assert!(matches!(
            PpmDecoder::decode(b"P3\n1 1\n15\n1 16 3\n", PpmFormat::Ascii),
            Err(Error::InvalidSample(_))
        ));
    }

    #[test]
    fn test_decode_zero_size() {
        assert!(matches!(
            PpmDecoder::decode(b"P3\n0 4\n255\n", PpmFormat::Ascii),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_decode_any_detects_format() {
        let layer = sample_layer();
        for format in [PpmFormat::Ascii, PpmFormat::Binary] {
            let bytes = PpmEncoder::to_bytes(&layer, format).expect("encoding should succeed");
            let decoded = PpmDecoder::decode_any(&bytes).expect("decoding should succeed");
            assert_eq!(decoded.get_pixel(Point::ORIGIN), Rgba::RED);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let layer = sample_layer();

        let p3 = dir.path().join("frame.ppm");
        layer.save_p3(&p3).expect("save should succeed");
        let loaded = Layer::load_p3(&p3).expect("load should succeed");
        assert_eq!(loaded.to_rgb8(), layer.to_rgb8());

        let p6 = dir.path().join("frame_bin.ppm");
        layer.save_p6(&p6).expect("save should succeed");
        let loaded = Layer::load_p6(&p6).expect("load should succeed");
        assert_eq!(loaded.to_rgb8(), layer.to_rgb8());

        assert!(Layer::load_p6(&p3).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let err = Layer::load_p3(dir.path().join("missing.ppm")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
