// SPDX-License-Identifier: MPL-2.0
//! Accepted image formats and content-based format detection.
//!
//! The viewer supports PNG, JPEG, and TIFF. Files are identified by their
//! magic bytes, not by extension; extensions are only used to pre-filter
//! the open dialog.

pub mod image;

pub use self::image::{load_image, ImageData};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extensions offered by the open dialog filter.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Longest magic-byte prefix we need to inspect (PNG signature).
const SNIFF_LEN: usize = 8;

/// Image format recognized from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    Png,
    Jpeg,
    Tiff,
}

impl SniffedFormat {
    /// Maps the sniffed format onto the decoder's format tag.
    #[must_use]
    pub fn as_image_format(self) -> image_rs::ImageFormat {
        match self {
            SniffedFormat::Png => image_rs::ImageFormat::Png,
            SniffedFormat::Jpeg => image_rs::ImageFormat::Jpeg,
            SniffedFormat::Tiff => image_rs::ImageFormat::Tiff,
        }
    }
}

/// Identifies an accepted image format from the leading bytes of a file.
#[must_use]
pub fn sniff_format(bytes: &[u8]) -> Option<SniffedFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(SniffedFormat::Png);
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(SniffedFormat::Jpeg);
    }
    // Little-endian and big-endian TIFF headers.
    if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
        return Some(SniffedFormat::Tiff);
    }
    None
}

/// Reads the leading bytes of `path` and sniffs the format.
///
/// Returns `None` for unreadable files as well as unrecognized content,
/// so callers can treat both as "not an image we accept".
#[must_use]
pub fn sniff_file<P: AsRef<Path>>(path: P) -> Option<SniffedFormat> {
    // `take` + `read_to_end` keeps reading until EOF, so a short first
    // read cannot truncate the header.
    let mut header = Vec::with_capacity(SNIFF_LEN);
    let file = File::open(path).ok()?;
    file.take(SNIFF_LEN as u64).read_to_end(&mut header).ok()?;
    sniff_format(&header)
}

/// Whether `path` points at a regular file whose content we accept.
/// Used to filter drag-and-drop before attempting a full decode.
#[must_use]
pub fn is_accepted_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.is_file() && sniff_file(path).is_some()
}
