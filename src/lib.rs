// SPDX-License-Identifier: MPL-2.0
//! `picsure` is a minimal image viewer built with the Iced GUI framework.
//!
//! It displays a single raster image in a scrollable pane with three zoom
//! modes (absolute factor, 1:1, and fit-to-window), loads files from the
//! command line, an open dialog, or drag-and-drop, and remembers the
//! window size between sessions.

#![doc(html_root_url = "https://docs.rs/picsure/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
