// SPDX-License-Identifier: MPL-2.0
//! Toolbar: open/navigation buttons, zoom commands, and the zoom readout.

use crate::ui::state::zoom::ZoomMode;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFile,
    Previous,
    Next,
    ZoomOut,
    ZoomIn,
    FitView,
    FullSize,
}

pub struct ViewModel {
    pub zoom_percent: u32,
    pub zoom_mode: ZoomMode,
    pub has_image: bool,
}

pub fn view(model: &ViewModel) -> Element<'static, Message> {
    let open_button = button(Text::new("Open"))
        .on_press(Message::OpenFile)
        .padding([6.0, 12.0]);

    // Directory navigation is reserved; the actions exist but stay
    // disabled (no on_press).
    let previous_button = button(Text::new("Previous")).padding([6.0, 12.0]);
    let next_button = button(Text::new("Next")).padding([6.0, 12.0]);

    let zoom_out_button = button(Text::new("−"))
        .on_press(Message::ZoomOut)
        .padding([6.0, 12.0]);

    let zoom_in_button = button(Text::new("+"))
        .on_press(Message::ZoomIn)
        .padding([6.0, 12.0]);

    let fit_button = button(Text::new("Fit View"))
        .on_press(Message::FitView)
        .padding([6.0, 12.0]);

    let full_size_button = button(Text::new("Full Size"))
        .on_press(Message::FullSize)
        .padding([6.0, 12.0]);

    let readout = if model.has_image {
        let mode_tag = match model.zoom_mode {
            ZoomMode::Fit => " (fit)",
            ZoomMode::Isometric | ZoomMode::Absolute => "",
        };
        Text::new(format!("{}%{}", model.zoom_percent, mode_tag))
    } else {
        Text::new("")
    };

    Row::new()
        .spacing(10)
        .padding(10)
        .align_y(Vertical::Center)
        .push(open_button)
        .push(previous_button)
        .push(next_button)
        .push(Space::new().width(Length::Fixed(16.0)))
        .push(zoom_out_button)
        .push(zoom_in_button)
        .push(fit_button)
        .push(full_size_button)
        .push(readout)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_view_renders() {
        let model = ViewModel {
            zoom_percent: 125,
            zoom_mode: ZoomMode::Absolute,
            has_image: true,
        };
        let _element = view(&model);
    }
}
