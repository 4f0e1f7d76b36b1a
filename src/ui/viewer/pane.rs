// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: paint geometry and the scrollable widget tree.
//!
//! The geometry helpers are the paint model of the viewer: which source
//! rectangle of the image is visible, where it lands in the viewport, and
//! how the image is centered when it is smaller than the viewport. The
//! `view` function realizes that model with an `Image` widget inside a
//! scrollable, sized to the zoomed dimensions and centered with padding.

use crate::media::ImageData;
use crate::ui::state::zoom::{self, ZoomMode};
use crate::ui::state::ScrollOffset;
use crate::ui::viewer::component::{Message, SCROLLABLE_ID};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{responsive, Container, Image, Scrollable};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Background, Color, Element, Length, Padding, Point, Rectangle, Size, Theme,
};

/// Source and destination rectangles for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderLayout {
    /// Visible sub-rectangle of the image, in image coordinates.
    pub source: Rectangle,
    /// Where the image lands in the viewport, re-centered on each axis
    /// where the scaled image is smaller than the viewport.
    pub dest: Rectangle,
}

/// Image dimensions scaled by the zoom factor.
#[must_use]
pub fn scaled_size(width: u32, height: u32, factor: f32) -> Size {
    Size::new(width as f32 * factor, height as f32 * factor)
}

/// Padding that centers content of `scaled` size inside `available`,
/// floored to whole pixels. Zero on any axis where the content overflows.
#[must_use]
pub fn centering_padding(scaled: Size, available: Size) -> Padding {
    let horizontal = ((available.width - scaled.width) / 2.0).floor().max(0.0);
    let vertical = ((available.height - scaled.height) / 2.0).floor().max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Computes the paint rectangles for the current scroll offset and zoom.
///
/// The source rectangle is the inverse-mapped visible region: anchored at
/// `offset / zoom`, sized `viewport / zoom`. The destination starts as
/// the full viewport and is shifted to the centering position on each
/// axis where the scaled image under-fills it.
#[must_use]
pub fn visible_layout(
    image_width: u32,
    image_height: u32,
    factor: f32,
    viewport: Size,
    offset: ScrollOffset,
) -> RenderLayout {
    let source = Rectangle::new(
        Point::new(offset.x as f32 / factor, offset.y as f32 / factor),
        Size::new(viewport.width / factor, viewport.height / factor),
    );

    let scaled = scaled_size(image_width, image_height, factor);
    let mut dest = Rectangle::new(Point::ORIGIN, viewport);

    if viewport.width - scaled.width > 0.0 {
        dest.x = ((viewport.width - scaled.width) / 2.0).floor();
    }
    if viewport.height - scaled.height > 0.0 {
        dest.y = ((viewport.height - scaled.height) / 2.0).floor();
    }

    RenderLayout { source, dest }
}

pub struct ViewModel<'a> {
    pub image: &'a ImageData,
    pub zoom_factor: f32,
    pub zoom_mode: ZoomMode,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    responsive(move |available: Size| view_inner(&model, available)).into()
}

fn view_inner<'a>(model: &ViewModel<'a>, available: Size) -> Element<'a, Message> {
    // In fit mode the pane always renders at the factor that matches the
    // current layout; the stored factor catches up when the debounced
    // resize handler fires.
    let effective_factor = match model.zoom_mode {
        ZoomMode::Fit => zoom::fit_factor(
            model.image.width,
            model.image.height,
            available.width,
            available.height,
        ),
        _ => model.zoom_factor,
    };

    let scaled = scaled_size(model.image.width, model.image.height, effective_factor);
    let padding = centering_padding(scaled, available);

    let image = Image::new(model.image.handle.clone())
        .width(Length::Fixed(scaled.width.max(1.0)))
        .height(Length::Fixed(scaled.height.max(1.0)));

    let content = Container::new(image).padding(padding);

    let scrollable = Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    surface(scrollable.into())
}

/// Wraps content in the viewer's background surface (black fill).
pub fn surface(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn scaled_size_multiplies_dimensions() {
        let size = scaled_size(1600, 1200, 0.5);
        assert_abs_diff_eq!(size.width, 800.0);
        assert_abs_diff_eq!(size.height, 600.0);
    }

    #[test]
    fn centering_padding_floors_and_clamps() {
        let padding = centering_padding(Size::new(301.0, 700.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(padding.left, 249.0);
        assert_abs_diff_eq!(padding.right, 249.0);
        // Vertical overflow: no padding.
        assert_abs_diff_eq!(padding.top, 0.0);
    }

    #[test]
    fn visible_layout_inverse_maps_the_scroll_offset() {
        let layout = visible_layout(
            1600,
            1200,
            2.0,
            Size::new(800.0, 600.0),
            ScrollOffset { x: 400, y: 100 },
        );

        assert_abs_diff_eq!(layout.source.x, 200.0);
        assert_abs_diff_eq!(layout.source.y, 50.0);
        assert_abs_diff_eq!(layout.source.width, 400.0);
        assert_abs_diff_eq!(layout.source.height, 300.0);

        // Image overflows the viewport on both axes: no centering shift.
        assert_abs_diff_eq!(layout.dest.x, 0.0);
        assert_abs_diff_eq!(layout.dest.y, 0.0);
    }

    #[test]
    fn visible_layout_centers_smaller_images() {
        let layout = visible_layout(
            400,
            300,
            0.5,
            Size::new(801.0, 600.0),
            ScrollOffset::default(),
        );

        // Scaled image is 200x150; centering offsets are floored.
        assert_abs_diff_eq!(layout.dest.x, 300.0);
        assert_abs_diff_eq!(layout.dest.y, 225.0);
    }
}
