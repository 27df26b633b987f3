//! Output encoders (PPM, PNG).

#[cfg(feature = "png")]
mod png_encoder;
mod ppm;

#[cfg(feature = "png")]
pub use png_encoder::PngEncoder;
pub use ppm::{PpmDecoder, PpmEncoder, PpmFormat};
