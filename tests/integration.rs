// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use picsure::app;
use picsure::config::{self, Config};
use picsure::media::ImageData;
use picsure::ui::state::zoom::ZoomMode;
use picsure::ui::viewer::component::{Event, Message, State};
use std::path::Path;
use tempfile::tempdir;

fn sample_image(width: u32, height: u32) -> ImageData {
    let pixels = vec![0_u8; (width * height * 4) as usize];
    ImageData::from_rgba(width, height, pixels)
}

fn report_layout(state: &mut State, width: f32, height: f32) {
    let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(width, height));
    let _ = state.update(Message::ViewportChanged {
        bounds,
        offset: AbsoluteOffset { x: 0.0, y: 0.0 },
    });
}

#[test]
fn open_zoom_and_fit_walkthrough() {
    let mut state = State::new();
    report_layout(&mut state, 800.0, 600.0);

    // Opening an image in the default fit mode letterboxes it.
    let (events, _task) = state.update(Message::ImageLoaded(Ok(sample_image(1600, 1200))));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::ImageChanged)));
    assert_eq!(state.zoom_mode(), ZoomMode::Fit);
    assert_abs_diff_eq!(state.zoom_factor(), 0.5);

    // Stepped zoom pins absolute mode first, then applies the factor.
    let (_, _) = state.update(Message::SetZoomMode(ZoomMode::Absolute));
    let (events, _) = state.update(Message::SetZoom(0.75));
    assert!(matches!(events.as_slice(), [Event::ZoomChanged(_)]));
    assert_abs_diff_eq!(state.zoom_factor(), 0.75);

    // Full size snaps back to 1:1.
    let (_, _) = state.update(Message::SetZoomMode(ZoomMode::Isometric));
    assert_abs_diff_eq!(state.zoom_factor(), 1.0);

    // A failed decode leaves everything in place.
    let (events, _) = state.update(Message::ImageLoaded(Err(picsure::error::Error::Decode(
        "unrecognized image format".into(),
    ))));
    assert!(matches!(events.as_slice(), [Event::LoadFailed(_)]));
    assert!(state.has_image());
    assert_abs_diff_eq!(state.zoom_factor(), 1.0);
}

#[test]
fn title_reflects_image_and_zoom_percent() {
    let title = app::format_title(Path::new("/pictures/sunset.jpeg"), 4032, 3024, 33);
    assert_eq!(title, "sunset (4032x3024) (33%)");
}

#[test]
fn window_geometry_round_trips_through_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        window_width: Some(1024.0),
        window_height: Some(768.0),
    };
    config::save_to_path(&saved, &path).expect("failed to write config file");

    let loaded = config::load_from_path(&path).expect("failed to load config from path");
    assert_eq!(loaded.window_size(), (1024.0, 768.0));

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn missing_geometry_falls_back_to_defaults() {
    let loaded = Config::default();
    assert_eq!(
        loaded.window_size(),
        (config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT)
    );
}
