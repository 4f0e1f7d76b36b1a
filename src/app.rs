// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer component.
//!
//! The `App` struct owns the viewer, the current file path, and the
//! window title text. It translates user intents (toolbar, keyboard,
//! file dialog, drag-and-drop) into viewer operations and folds the
//! viewer's notifications back into the title bar. Policy decisions
//! (zoom stepping, accepted formats, window geometry persistence) live
//! here, close to the main update loop.

use crate::config::{self, Config};
use crate::media;
use crate::ui::state::zoom::{self, ZoomMode};
use crate::ui::toolbar;
use crate::ui::viewer::{self, component};
use iced::widget::Column;
use iced::{event, keyboard, window, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;

/// Application name shown while no image is loaded.
pub const APP_NAME: &str = "picsure";

/// Root Iced application state bridging the viewer component and the
/// window chrome.
#[derive(Debug)]
pub struct App {
    viewer: component::State,
    /// Path of the most recently successfully loaded image.
    current_path: Option<PathBuf>,
    /// Path of a load currently in flight; promoted to `current_path`
    /// when the viewer confirms the image changed.
    pending_path: Option<PathBuf>,
    title: String,
    window_size: Size,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Toolbar(toolbar::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Runtime events the shell cares about (resize, drop, keyboard).
    RawEvent(event::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load().unwrap_or_default();
    let (width, height) = config.window_size();

    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(width, height),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            viewer: component::State::new(),
            current_path: None,
            pending_path: None,
            title: APP_NAME.to_string(),
            window_size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Window title text for a loaded image:
/// `<filename> (<width>x<height>) (<zoom-percent>%)`.
#[must_use]
pub fn format_title(path: &std::path::Path, width: u32, height: u32, zoom_percent: u32) -> String {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("{name} ({width}x{height}) ({zoom_percent}%)")
}

impl App {
    /// Initializes application state and optionally kicks off image
    /// loading for a path received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let (width, height) = config.window_size();

        let mut app = App {
            window_size: Size::new(width, height),
            ..Self::default()
        };

        let task = if let Some(path_str) = flags.file_path {
            let path = PathBuf::from(&path_str);
            app.pending_path = Some(path.clone());
            Task::perform(async move { media::load_image(&path) }, |result| {
                Message::Viewer(component::Message::ImageLoaded(result))
            })
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_subscription = event::listen_with(|event, status, _window| match &event {
            event::Event::Window(window::Event::Resized(_) | window::Event::FileDropped(_)) => {
                Some(Message::RawEvent(event.clone()))
            }
            event::Event::Keyboard(_) => match status {
                event::Status::Ignored => Some(Message::RawEvent(event.clone())),
                event::Status::Captured => None,
            },
            _ => None,
        });

        let debounce_subscription = self.viewer.subscription().map(Message::Viewer);

        Subscription::batch([event_subscription, debounce_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => self.forward_viewer(viewer_message),
            Message::Toolbar(toolbar_message) => self.handle_toolbar_message(toolbar_message),
            Message::OpenFileDialogResult(Some(path)) => self.start_load(path),
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let toolbar_model = toolbar::ViewModel {
            zoom_percent: self.viewer.zoom_state().percent(),
            zoom_mode: self.viewer.zoom_mode(),
            has_image: self.viewer.has_image(),
        };

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toolbar::view(&toolbar_model).map(Message::Toolbar))
            .push(viewer::view(&self.viewer).map(Message::Viewer))
            .into()
    }

    /// Runs a viewer message through the component, folds the resulting
    /// notifications into shell state, and persists window geometry when
    /// a debounced resize settles.
    fn forward_viewer(&mut self, message: component::Message) -> Task<Message> {
        let was_resize_pending = self.viewer.resize_pending();
        let (events, task) = self.viewer.update(message);

        if was_resize_pending && !self.viewer.resize_pending() {
            self.persist_geometry();
        }

        self.handle_viewer_events(events);
        task.map(Message::Viewer)
    }

    fn handle_viewer_events(&mut self, events: Vec<component::Event>) {
        for event in events {
            match event {
                component::Event::ImageChanged => {
                    if let Some(path) = self.pending_path.take() {
                        self.current_path = Some(path);
                    }
                    self.refresh_title();
                }
                component::Event::ZoomChanged(_) | component::Event::ZoomModeChanged(_) => {
                    self.refresh_title();
                }
                component::Event::LoadFailed(_) => {
                    // Silent rejection: the previous image and title are
                    // retained.
                    self.pending_path = None;
                }
            }
        }
    }

    fn refresh_title(&mut self) {
        // Zoom notifications can arrive without an image; only compute
        // the image title when both pieces are present.
        self.title = match (&self.current_path, self.viewer.image()) {
            (Some(path), Some(image)) => format_title(
                path,
                image.width,
                image.height,
                self.viewer.zoom_state().percent(),
            ),
            _ => APP_NAME.to_string(),
        };
    }

    fn handle_toolbar_message(&mut self, message: toolbar::Message) -> Task<Message> {
        match message {
            toolbar::Message::OpenFile => open_file_dialog(),
            // Reserved actions; the buttons are disabled.
            toolbar::Message::Previous | toolbar::Message::Next => Task::none(),
            toolbar::Message::ZoomIn => {
                self.apply_stepped_zoom(zoom::step_up(self.viewer.zoom_factor()))
            }
            toolbar::Message::ZoomOut => {
                self.apply_stepped_zoom(zoom::step_down(self.viewer.zoom_factor()))
            }
            toolbar::Message::FitView => {
                self.forward_viewer(component::Message::SetZoomMode(ZoomMode::Fit))
            }
            toolbar::Message::FullSize => {
                self.forward_viewer(component::Message::SetZoomMode(ZoomMode::Isometric))
            }
        }
    }

    /// Stepped zoom is an absolute-zoom gesture: it first pins the mode
    /// so a later resize does not snap the factor back to fit.
    fn apply_stepped_zoom(&mut self, factor: f32) -> Task<Message> {
        let mode_task = self.forward_viewer(component::Message::SetZoomMode(ZoomMode::Absolute));
        let zoom_task = self.forward_viewer(component::Message::SetZoom(factor));
        Task::batch([mode_task, zoom_task])
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.window_size = size;
                self.forward_viewer(component::Message::WindowResized(size))
            }
            event::Event::Window(window::Event::FileDropped(path)) => {
                if media::is_accepted_file(&path) {
                    self.start_load(path)
                } else {
                    log::info!("rejected dropped file: {}", path.display());
                    Task::none()
                }
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                self.handle_key_pressed(&key, modifiers)
            }
            _ => Task::none(),
        }
    }

    fn handle_key_pressed(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let keyboard::Key::Character(c) = key else {
            return Task::none();
        };

        match c.as_str() {
            "+" | "=" => self.apply_stepped_zoom(zoom::step_up(self.viewer.zoom_factor())),
            "-" => self.apply_stepped_zoom(zoom::step_down(self.viewer.zoom_factor())),
            "f" => self.forward_viewer(component::Message::SetZoomMode(ZoomMode::Fit)),
            "1" => self.forward_viewer(component::Message::SetZoomMode(ZoomMode::Isometric)),
            "o" if modifiers.command() => open_file_dialog(),
            _ => Task::none(),
        }
    }

    fn start_load(&mut self, path: PathBuf) -> Task<Message> {
        self.pending_path = Some(path.clone());
        Task::perform(async move { media::load_image(&path) }, |result| {
            Message::Viewer(component::Message::ImageLoaded(result))
        })
    }

    fn persist_geometry(&self) {
        let config = Config {
            window_width: Some(self.window_size.width),
            window_height: Some(self.window_size.height),
        };
        if let Err(error) = config::save(&config) {
            log::warn!("failed to persist window geometry: {error}");
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::ACCEPTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use std::path::Path;

    fn sample_image(width: u32, height: u32) -> ImageData {
        let pixels = vec![255_u8; (width * height * 4) as usize];
        ImageData::from_rgba(width, height, pixels)
    }

    #[test]
    fn format_title_matches_expected_shape() {
        let title = format_title(Path::new("/pictures/holiday.png"), 1600, 1200, 50);
        assert_eq!(title, "holiday (1600x1200) (50%)");
    }

    #[test]
    fn title_falls_back_to_app_name_without_image() {
        let mut app = App::default();
        app.refresh_title();
        assert_eq!(app.title(), APP_NAME);
    }

    #[test]
    fn image_changed_promotes_pending_path_into_title() {
        let mut app = App::default();
        app.pending_path = Some(PathBuf::from("/pictures/cat.jpg"));
        let events = {
            let viewer = &mut app.viewer;
            viewer.load_image(sample_image(640, 480))
        };

        app.handle_viewer_events(events);

        assert_eq!(app.current_path, Some(PathBuf::from("/pictures/cat.jpg")));
        assert_eq!(app.title(), "cat (640x480) (100%)");
        assert!(app.pending_path.is_none());
    }

    #[test]
    fn zoom_changed_without_image_keeps_fallback_title() {
        let mut app = App::default();

        app.handle_viewer_events(vec![component::Event::ZoomChanged(2.0)]);

        assert_eq!(app.title(), APP_NAME);
    }

    #[test]
    fn load_failure_clears_pending_path_and_keeps_title() {
        let mut app = App::default();
        app.pending_path = Some(PathBuf::from("/pictures/broken.png"));

        app.handle_viewer_events(vec![component::Event::LoadFailed(
            crate::error::Error::Decode("unrecognized image format".into()),
        )]);

        assert!(app.pending_path.is_none());
        assert!(app.current_path.is_none());
        assert_eq!(app.title(), APP_NAME);
    }
}
