// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the accepted raster formats.

use crate::error::{Error, Result};
use crate::media;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded raster image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its decoded data.
///
/// The format is determined by content sniffing, never by extension; a
/// file whose magic bytes are not PNG, JPEG, or TIFF is rejected before
/// any decoding is attempted.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The content is not an accepted format ([`Error::Decode`])
/// - The decoder rejects the data ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let format = media::sniff_format(&bytes)
        .ok_or_else(|| Error::Decode("unrecognized image format".into()))?;

    let img = image_rs::load_from_memory_with_format(&bytes, format.as_image_format())?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
