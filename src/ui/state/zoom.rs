// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module holds the zoom factor, the zoom mode, and the arithmetic
//! shared by the viewer and the shell:
//! - Fit-factor computation (letterbox fit, width pass then height pass)
//! - Stepped zoom in/out used by the toolbar and keyboard shortcuts

/// Zoom factor used when nothing overrides it (native 1:1 scale).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Smallest factor reachable through stepped zoom-out.
pub const MIN_ZOOM_FACTOR: f32 = 0.25;

/// Increment applied by the toolbar/keyboard zoom commands.
pub const ZOOM_STEP_FACTOR: f32 = 0.25;

/// How the zoom factor reacts to viewport and image changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// User-set factor held fixed across viewport resizes.
    Absolute,
    /// Factor pinned to 1.0 (full/native size).
    Isometric,
    /// Factor recomputed on viewport-size change so the whole image fits.
    #[default]
    Fit,
}

/// Current zoom factor plus the mode that governs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub factor: f32,
    pub mode: ZoomMode,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: DEFAULT_ZOOM_FACTOR,
            mode: ZoomMode::default(),
        }
    }
}

impl ZoomState {
    /// Zoom percentage as shown in the title bar, floored to an integer.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.factor * 100.0).floor().max(0.0) as u32
    }
}

/// Computes the factor that fits an image inside a viewport without
/// cropping. Returns 1.0 when any dimension is degenerate.
///
/// The width is fitted first; if the resulting height would overflow the
/// viewport, the height is fitted instead. The scaled image therefore
/// never exceeds either viewport dimension, at the cost of under-filling
/// the other axis (letterbox behavior).
#[must_use]
pub fn fit_factor(
    image_width: u32,
    image_height: u32,
    viewport_width: f32,
    viewport_height: f32,
) -> f32 {
    if image_width == 0 || image_height == 0 || viewport_width <= 0.0 || viewport_height <= 0.0 {
        return DEFAULT_ZOOM_FACTOR;
    }

    let mut factor = viewport_width / image_width as f32;

    if (image_height as f32 * factor).floor() > viewport_height.floor() {
        factor = viewport_height / image_height as f32;
    }

    if !factor.is_finite() || factor <= 0.0 {
        return DEFAULT_ZOOM_FACTOR;
    }

    factor
}

/// Next zoom factor for a "zoom in" command: the current factor floored
/// onto the step grid, plus one step.
#[must_use]
pub fn step_up(factor: f32) -> f32 {
    (factor / ZOOM_STEP_FACTOR).floor() * ZOOM_STEP_FACTOR + ZOOM_STEP_FACTOR
}

/// Next zoom factor for a "zoom out" command: the current factor ceiled
/// onto the step grid, minus one step, clamped to the minimum.
#[must_use]
pub fn step_down(factor: f32) -> f32 {
    let stepped = (factor / ZOOM_STEP_FACTOR).ceil() * ZOOM_STEP_FACTOR - ZOOM_STEP_FACTOR;
    stepped.max(MIN_ZOOM_FACTOR)
}
