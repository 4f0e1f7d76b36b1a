// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating the image slot, zoom state, and scroll
//! bookkeeping, plus the update logic that reacts to layout events.
//!
//! All mutations go through `load_image`, `set_zoom`, and `set_zoom_mode`;
//! invalid input (non-positive zoom, redundant mode, zoom without an
//! image) is a silent no-op. Operations return the notifications the
//! shell folds into the window title.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::state::zoom::{self, ZoomMode, ZoomState};
use crate::ui::state::ViewportState;
use crate::ui::viewer::pane;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{time, Rectangle, Size, Subscription, Task};
use std::time::{Duration, Instant};

/// Identifier used for the viewer scrollable widget.
pub const SCROLLABLE_ID: &str = "viewer-image-scrollable";

/// Quiet period after the last resize event before the viewer reacts.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Polling cadence of the debounce tick while a resize is pending.
const RESIZE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A decode attempt finished (dialog, drag-and-drop, or CLI).
    ImageLoaded(Result<ImageData, Error>),
    /// Apply an absolute zoom factor.
    SetZoom(f32),
    /// Switch the zoom mode.
    SetZoomMode(ZoomMode),
    /// The scrollable reported new bounds and/or scroll offset.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// The window was resized; rearms the debounce deadline.
    WindowResized(Size),
    /// Periodic tick while a debounced resize is pending.
    ResizePoll(Instant),
}

/// Notifications emitted by viewer operations, consumed by the shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// The displayed image was replaced.
    ImageChanged,
    /// The zoom factor changed.
    ZoomChanged(f32),
    /// The zoom mode changed.
    ZoomModeChanged(ZoomMode),
    /// A decode attempt failed; the previous image is retained.
    LoadFailed(Error),
}

/// Complete viewer component state.
#[derive(Debug, Default)]
pub struct State {
    image: Option<ImageData>,
    zoom: ZoomState,
    viewport: ViewportState,
    /// Last known window size, used to track viewport growth between
    /// scroll reports.
    window_size: Option<Size>,
    /// When the last resize event arrived; `Some` while the debounce is
    /// armed.
    pending_resize: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor
    }

    pub fn zoom_mode(&self) -> ZoomMode {
        self.zoom.mode
    }

    pub fn zoom_state(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn resize_pending(&self) -> bool {
        self.pending_resize.is_some()
    }

    /// Replaces the displayed image, dropping the previous one. Resets
    /// the scroll offset to the origin and recomputes scroll ranges for
    /// the new image at the current zoom. Zoom factor and mode are left
    /// untouched.
    pub fn load_image(&mut self, image: ImageData) -> Vec<Event> {
        log::debug!("image loaded: {}x{}", image.width, image.height);
        self.image = Some(image);
        self.viewport.reset_offset();
        self.refresh_scroll_range();
        vec![Event::ImageChanged]
    }

    /// Applies an absolute zoom factor. No-op unless `factor > 0` and an
    /// image is loaded. The scroll offset is carried over into the new
    /// factor's coordinate space (`floor(offset / old * new)`), then the
    /// ranges are refreshed and the offset re-applied. The mode is not
    /// touched; callers wanting persistent fit/full-size behavior set the
    /// mode separately.
    pub fn set_zoom(&mut self, factor: f32) -> Vec<Event> {
        if factor <= 0.0 || self.image.is_none() {
            return Vec::new();
        }

        let old_factor = self.zoom.factor;
        self.viewport.offset = self.viewport.offset.rescaled(old_factor, factor);
        self.zoom.factor = factor;
        self.refresh_scroll_range();
        self.viewport.clamp_offset();

        log::debug!("zoom {old_factor} -> {factor}");
        vec![Event::ZoomChanged(factor)]
    }

    /// Switches the zoom mode. No-op if the mode is unchanged. Applies
    /// the mode's target factor through [`Self::set_zoom`] when it
    /// differs from the current factor by more than epsilon.
    pub fn set_zoom_mode(&mut self, mode: ZoomMode) -> Vec<Event> {
        if mode == self.zoom.mode {
            return Vec::new();
        }

        let target = match mode {
            ZoomMode::Isometric => zoom::DEFAULT_ZOOM_FACTOR,
            ZoomMode::Fit => self.fit_factor(),
            ZoomMode::Absolute => self.zoom.factor,
        };

        self.zoom.mode = mode;
        let mut events = vec![Event::ZoomModeChanged(mode)];

        if (target - self.zoom.factor).abs() > f32::EPSILON {
            events.extend(self.set_zoom(target));
        }

        events
    }

    /// Factor that fits the current image inside the viewport; 1.0 when
    /// either is missing.
    #[must_use]
    pub fn fit_factor(&self) -> f32 {
        match (&self.image, self.viewport.bounds) {
            (Some(image), Some(bounds)) => {
                zoom::fit_factor(image.width, image.height, bounds.width, bounds.height)
            }
            _ => zoom::DEFAULT_ZOOM_FACTOR,
        }
    }

    fn refresh_scroll_range(&mut self) {
        let image_size = self.image.as_ref().map(|image| (image.width, image.height));
        self.viewport.update_range(image_size, self.zoom.factor);
    }

    /// Reapplies the fit factor when in fit mode. Returns the resulting
    /// events (empty when the factor is already within epsilon).
    fn refresh_fit_zoom(&mut self) -> Vec<Event> {
        if self.zoom.mode != ZoomMode::Fit || self.image.is_none() {
            return Vec::new();
        }

        let target = self.fit_factor();
        if (target - self.zoom.factor).abs() > f32::EPSILON {
            self.set_zoom(target)
        } else {
            Vec::new()
        }
    }

    /// Task that moves the scrollable widget to the stored offset.
    fn sync_scroll_task(&self) -> Task<Message> {
        operation::scroll_to(Id::new(SCROLLABLE_ID), self.viewport.offset.as_absolute())
    }

    pub fn update(&mut self, message: Message) -> (Vec<Event>, Task<Message>) {
        match message {
            Message::ImageLoaded(Ok(image)) => {
                let mut events = self.load_image(image);
                // The load itself leaves the factor alone; with the fit
                // hint active the glue immediately recomputes it for the
                // new image dimensions.
                events.extend(self.refresh_fit_zoom());
                let snap = operation::snap_to(
                    Id::new(SCROLLABLE_ID),
                    RelativeOffset { x: 0.0, y: 0.0 },
                );
                (events, snap)
            }
            Message::ImageLoaded(Err(error)) => {
                log::warn!("image load failed: {error}");
                (vec![Event::LoadFailed(error)], Task::none())
            }
            Message::SetZoom(factor) => {
                let events = self.set_zoom(factor);
                let task = if events.is_empty() {
                    Task::none()
                } else {
                    self.sync_scroll_task()
                };
                (events, task)
            }
            Message::SetZoomMode(mode) => {
                let events = self.set_zoom_mode(mode);
                let task = if events.is_empty() {
                    Task::none()
                } else {
                    self.sync_scroll_task()
                };
                (events, task)
            }
            Message::ViewportChanged { bounds, offset } => {
                let first_layout = self.viewport.bounds.is_none();
                self.viewport.update(bounds, offset);
                self.refresh_scroll_range();

                if let Some(image) = &self.image {
                    let layout = pane::visible_layout(
                        image.width,
                        image.height,
                        self.zoom.factor.max(f32::EPSILON),
                        bounds.size(),
                        self.viewport.offset,
                    );
                    log::debug!(
                        "viewport moved: visible image region {:?} -> {:?}",
                        layout.source,
                        layout.dest
                    );
                }

                // The first layout report is the earliest point at which
                // a fit factor can be computed for an image loaded from
                // the command line.
                let events = if first_layout {
                    self.refresh_fit_zoom()
                } else {
                    Vec::new()
                };
                (events, Task::none())
            }
            Message::WindowResized(size) => {
                // Grow or shrink the last known viewport bounds by the
                // window delta so the debounced handler sees fresh
                // dimensions even if no scroll report arrives in between.
                if let (Some(previous), Some(bounds)) = (self.window_size, &mut self.viewport.bounds)
                {
                    bounds.width = (bounds.width + size.width - previous.width).max(0.0);
                    bounds.height = (bounds.height + size.height - previous.height).max(0.0);
                }
                self.window_size = Some(size);
                self.pending_resize = Some(Instant::now());
                (Vec::new(), Task::none())
            }
            Message::ResizePoll(now) => {
                let Some(started) = self.pending_resize else {
                    return (Vec::new(), Task::none());
                };

                if now.saturating_duration_since(started) < RESIZE_DEBOUNCE {
                    return (Vec::new(), Task::none());
                }

                self.pending_resize = None;
                let events = self.refresh_fit_zoom();
                self.refresh_scroll_range();
                self.viewport.clamp_offset();
                (events, self.sync_scroll_task())
            }
        }
    }

    /// The debounce tick, subscribed only while a resize is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.pending_resize.is_some() {
            time::every(RESIZE_POLL_INTERVAL).map(Message::ResizePoll)
        } else {
            Subscription::none()
        }
    }
}
