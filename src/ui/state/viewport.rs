// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the scrollable viewport bounds, the integer scroll offset into
//! zoomed image space, and the scroll ranges derived from image size and
//! zoom. The scrollable widget owns the actual scrolling; this state is
//! the bookkeeping the viewer uses to constrain and rescale it.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Integer scroll offset in zoomed image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: i32,
    pub y: i32,
}

impl ScrollOffset {
    /// Rescales the offset from one zoom factor's coordinate space into
    /// another's: `offset' = floor(offset / old_zoom * new_zoom)`.
    #[must_use]
    pub fn rescaled(self, old_zoom: f32, new_zoom: f32) -> Self {
        Self {
            x: (self.x as f32 / old_zoom * new_zoom).floor() as i32,
            y: (self.y as f32 / old_zoom * new_zoom).floor() as i32,
        }
    }

    /// The offset as the scrollable widget's absolute offset type.
    #[must_use]
    pub fn as_absolute(self) -> AbsoluteOffset {
        AbsoluteOffset {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

impl From<AbsoluteOffset> for ScrollOffset {
    fn from(offset: AbsoluteOffset) -> Self {
        Self {
            x: offset.x.floor() as i32,
            y: offset.y.floor() as i32,
        }
    }
}

/// Maximum scroll extents per axis; the minimum is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRange {
    pub max_x: i32,
    pub max_y: i32,
}

/// Manages viewport and scroll state
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current scroll offset in zoomed image coordinates.
    pub offset: ScrollOffset,

    /// Current viewport bounds, unknown until the first layout pass.
    pub bounds: Option<Rectangle>,

    /// Scroll ranges for the current image and zoom.
    pub range: ScrollRange,
}

impl ViewportState {
    /// Resets the scroll offset to the origin.
    pub fn reset_offset(&mut self) {
        self.offset = ScrollOffset::default();
    }

    /// Records the latest bounds and offset reported by the scrollable.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.bounds = Some(bounds);
        self.offset = offset.into();
    }

    /// Recomputes scroll ranges: `[0, floor(dim * zoom) - viewport_dim]`
    /// per axis when an image is present, collapsing negative extents and
    /// the no-image case to zero.
    pub fn update_range(&mut self, image_size: Option<(u32, u32)>, zoom: f32) {
        self.range = match (image_size, self.bounds) {
            (Some((width, height)), Some(bounds)) => ScrollRange {
                max_x: ((width as f32 * zoom).floor() as i32 - bounds.width as i32).max(0),
                max_y: ((height as f32 * zoom).floor() as i32 - bounds.height as i32).max(0),
            },
            _ => ScrollRange::default(),
        };
    }

    /// Clamps the current offset into the current range.
    pub fn clamp_offset(&mut self) {
        self.offset.x = self.offset.x.clamp(0, self.range.max_x);
        self.offset.y = self.offset.y.clamp(0, self.range.max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(width, height))
    }

    #[test]
    fn default_viewport_has_zero_offset_and_range() {
        let state = ViewportState::default();
        assert_eq!(state.offset, ScrollOffset::default());
        assert_eq!(state.range, ScrollRange::default());
        assert!(state.bounds.is_none());
    }

    #[test]
    fn rescaled_offset_uses_floor_semantics() {
        let offset = ScrollOffset { x: 100, y: 41 };
        let rescaled = offset.rescaled(1.0, 1.5);
        assert_eq!(rescaled, ScrollOffset { x: 150, y: 61 });
    }

    #[test]
    fn rescaled_offset_round_trip_is_stable_within_floor_error() {
        let zooms = [(1.0_f32, 2.0_f32), (0.5, 1.25), (1.5, 0.75), (2.0, 0.25)];
        let offset = ScrollOffset { x: 731, y: 409 };

        for (z1, z2) in zooms {
            let there = offset.rescaled(z1, z2);
            let back = there.rescaled(z2, z1);
            assert!(
                (back.x - offset.x).abs() <= (z1 / z2).ceil() as i32,
                "x drifted from {} to {} for zooms {z1}->{z2}",
                offset.x,
                back.x
            );
            assert!((back.y - offset.y).abs() <= (z1 / z2).ceil() as i32);
        }
    }

    #[test]
    fn range_widens_with_zoom() {
        let mut state = ViewportState {
            bounds: Some(bounds(800.0, 600.0)),
            ..ViewportState::default()
        };

        state.update_range(Some((1600, 1200)), 1.0);
        assert_eq!(
            state.range,
            ScrollRange {
                max_x: 800,
                max_y: 600
            }
        );

        state.update_range(Some((1600, 1200)), 1.25);
        assert_eq!(
            state.range,
            ScrollRange {
                max_x: 1200,
                max_y: 900
            }
        );
    }

    #[test]
    fn range_collapses_when_image_fits() {
        let mut state = ViewportState {
            bounds: Some(bounds(800.0, 600.0)),
            ..ViewportState::default()
        };

        state.update_range(Some((400, 300)), 1.0);
        assert_eq!(state.range, ScrollRange::default());
    }

    #[test]
    fn range_collapses_without_an_image() {
        let mut state = ViewportState {
            bounds: Some(bounds(800.0, 600.0)),
            offset: ScrollOffset { x: 10, y: 10 },
            ..ViewportState::default()
        };

        state.update_range(None, 2.0);
        assert_eq!(state.range, ScrollRange::default());

        state.clamp_offset();
        assert_eq!(state.offset, ScrollOffset::default());
    }

    #[test]
    fn clamp_offset_respects_range() {
        let mut state = ViewportState {
            bounds: Some(bounds(800.0, 600.0)),
            offset: ScrollOffset { x: 5000, y: -3 },
            ..ViewportState::default()
        };
        state.update_range(Some((1600, 1200)), 1.0);

        state.clamp_offset();
        assert_eq!(state.offset, ScrollOffset { x: 800, y: 0 });
    }
}
