// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the image collection model, the image view, the icon cache and
//! the status line. Every user action goes through the dispatch table in
//! [`update`]; after each message the toolbar and footer are re-derived from
//! the model, so nothing here caches model state.

pub mod action;
mod handlers;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, DEFAULT_ICON_SCALE, STATUS_ICON_SCALE};
use crate::i18n::I18n;
use crate::media::ImageCollection;
use crate::ui::dialogs::Dialog;
use crate::ui::icons::IconCache;
use crate::ui::image_view::ImageView;
use crate::ui::status::{Severity, Status};
use crate::ui::toolbar;
use action::Availability;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Status shown while no image is open.
const EMPTY_STATUS_KEY: &str = "status-load-image";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    icons: IconCache,
    collection: ImageCollection,
    view: ImageView,
    status: Status,
    /// Modal dialog drawn over the window, if any.
    dialog: Option<Dialog>,
    /// Whether the toolbar dropdown menu is open.
    menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_file", &self.collection.current_file())
            .field("modified", &self.collection.is_modified())
            .field("dialog", &self.dialog)
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are delivered as events so unsaved changes can be confirmed.
pub fn window_settings(icons: &mut IconCache) -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon: crate::icon::load_window_icon(icons),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let mut icons = IconCache::new();
    let settings = window_settings(&mut icons);

    // iced 0.14 requires an Fn boot closure; flags and the cache are consumed once.
    let boot_state = RefCell::new(Some((flags, icons)));
    let boot = move || {
        let (flags, icons) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, icons)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and opens the startup file, if any.
    pub fn new(flags: Flags, mut icons: IconCache) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load(flags.config_dir.as_deref());
        let i18n = I18n::new(flags.lang.clone(), &config);

        icons.preload(toolbar::icon_names().map(|name| (name, DEFAULT_ICON_SCALE)));
        icons.preload(
            Severity::ALL
                .into_iter()
                .map(|severity| (severity.icon_name(), STATUS_ICON_SCALE)),
        );

        let mut app = App {
            i18n,
            icons,
            collection: ImageCollection::new(config.sort_order(), config.resample_filter()),
            view: ImageView::new(config.zoom_factor()),
            status: Status::info(EMPTY_STATUS_KEY),
            dialog: None,
            menu_open: false,
        };

        if let Some(path) = flags.file_path {
            match app.collection.open(&path) {
                Ok(()) => app.show_current(),
                Err(err) => log::warn!("Cannot read from file {}: {err}", path.display()),
            }
        }

        if let Some(key) = config_warning {
            app.status = Status::warning(key);
        }

        (app, Task::none())
    }

    /// `*name - Photo Viewer` while modified, `name - Photo Viewer` otherwise.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .collection
            .current_file()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) if self.collection.is_modified() => format!("*{name} - {app_name}"),
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            icons: &self.icons,
            collection: &self.collection,
            image_view: &self.view,
            status: &self.status,
            dialog: self.dialog.as_ref(),
            menu_open: self.menu_open,
            availability: self.availability(),
        })
    }

    /// Model and view state the enablement of every action depends on.
    pub fn availability(&self) -> Availability {
        Availability {
            opened: self.collection.is_opened(),
            modified: self.collection.is_modified(),
            has_prev: self.collection.has_prev(),
            has_next: self.collection.has_next(),
            has_zoom_in: self.view.has_zoom_in(),
            has_zoom_out: self.view.has_zoom_out(),
        }
    }

    pub fn collection(&self) -> &ImageCollection {
        &self.collection
    }

    pub fn image_view(&self) -> &ImageView {
        &self.view
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Pushes the current pixels to the view, resetting zoom.
    fn show_current(&mut self) {
        match self.collection.pixels() {
            Some(pixels) => self.view.display(pixels),
            None => self.view.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn boot(file_path: Option<std::path::PathBuf>, config_dir: &std::path::Path) -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            config_dir: Some(config_dir.to_path_buf()),
            file_path,
        };
        App::new(flags, IconCache::new()).0
    }

    #[test]
    fn boots_empty_with_load_prompt() {
        let dir = tempdir().expect("temp dir");
        let app = boot(None, dir.path());
        assert!(!app.collection().is_opened());
        assert_eq!(app.status().message_key(), Some(EMPTY_STATUS_KEY));
        assert_eq!(app.title(), "Photo Viewer");
        assert_eq!(app.availability(), Availability::default());
    }

    #[test]
    fn boots_with_startup_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("a.png");
        RgbaImage::from_pixel(6, 4, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("write fixture");

        let app = boot(Some(path), dir.path());
        assert!(app.collection().is_opened());
        assert_eq!(app.image_view().displayed_size(), (6, 4));
        assert_eq!(app.title(), "a.png - Photo Viewer");
    }

    #[test]
    fn unreadable_startup_file_starts_empty() {
        let dir = tempdir().expect("temp dir");
        let app = boot(Some(dir.path().join("missing.png")), dir.path());
        assert!(!app.collection().is_opened());
        assert!(!app.image_view().has_image());
    }

    #[test]
    fn broken_config_shows_warning() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[display\nzoom").expect("write");
        let app = boot(None, dir.path());
        assert_eq!(app.status().severity(), Severity::Warning);
        assert_eq!(
            app.status().message_key(),
            Some(config::CONFIG_LOAD_WARNING_KEY)
        );
    }

    #[test]
    fn icons_are_preloaded_for_rendering() {
        let dir = tempdir().expect("temp dir");
        let app = boot(None, dir.path());
        assert!(app.icons.cached("open", DEFAULT_ICON_SCALE).is_some());
        assert!(app.icons.cached("error", STATUS_ICON_SCALE).is_some());
    }
}
