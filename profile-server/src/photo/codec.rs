//! Data-URI and PNG conversions

use std::borrow::Cow;
use std::io::Cursor;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use image::{DynamicImage, ImageFormat};

use super::PhotoError;

/// Prefix of every data-URI produced by [`to_data_uri`]
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Padded standard alphabet that tolerates non-zero trailing bits on decode
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Returns the base64 payload of a data-URI.
///
/// Everything up to and including the first comma is dropped. A string
/// without a comma is treated as a bare payload.
pub fn payload(data_uri: &str) -> &str {
    match data_uri.find(',') {
        Some(idx) => &data_uri[idx + 1..],
        None => data_uri,
    }
}

/// Decodes a data-URI into an image, sniffing the format from content
///
/// Line breaks inside the payload are ignored, so MIME-wrapped base64 is
/// accepted.
pub fn decode_data_uri(data_uri: &str) -> Result<DynamicImage, PhotoError> {
    let bytes = LENIENT
        .decode(unwrapped(payload(data_uri)).as_bytes())
        .map_err(PhotoError::Base64)?;
    decode_image(&bytes)
}

fn unwrapped(payload: &str) -> Cow<'_, str> {
    if payload.contains(['\r', '\n']) {
        Cow::Owned(payload.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(payload)
    }
}

/// Decodes raw image bytes, sniffing the format from content
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, PhotoError> {
    image::load_from_memory(bytes).map_err(PhotoError::Decode)
}

/// Encodes an image as PNG into memory
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Wraps PNG bytes in a `data:image/png;base64,` URI
pub fn to_data_uri(png: &[u8]) -> String {
    format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png))
}
