// SPDX-License-Identifier: MPL-2.0
//! Handler methods for App actions.
//!
//! One `handle_*` method per [`Action`](super::action::Action), plus the
//! follow-ups of asynchronous steps (file dialog result, deferred convert and
//! scale). Model errors end up in the status line, never in a panic.

use super::{App, Message, EMPTY_STATUS_KEY};
use crate::error::Error;
use crate::media::{self, SUPPORTED_EXTENSIONS};
use crate::ui::dialogs::{Dialog, ScaleForm};
use crate::ui::status::Status;
use iced::Task;
use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::{Path, PathBuf};

impl App {
    pub(super) fn handle_open(&mut self) -> Task<Message> {
        let filter_name = self.i18n.tr("dialog-open-filter");
        let start_dir = self
            .collection
            .current_file()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        Task::perform(
            async move {
                let mut dialog =
                    rfd::AsyncFileDialog::new().add_filter(filter_name, SUPPORTED_EXTENSIONS);

                if let Some(dir) = start_dir {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }

                dialog.pick_file().await.map(|h| h.path().to_path_buf())
            },
            Message::OpenDialogResult,
        )
    }

    /// Handles the result of the open file dialog.
    pub(super) fn handle_open_dialog_result(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            // User cancelled the dialog
            return Task::none();
        };
        self.open_path(&path)
    }

    pub(super) fn open_path(&mut self, path: &Path) -> Task<Message> {
        match self.collection.open(path) {
            Ok(()) => self.show_and_describe(),
            Err(err) => self.report(&err),
        }
        Task::none()
    }

    pub(super) fn handle_save(&mut self) -> Task<Message> {
        self.save_current();
        Task::none()
    }

    /// Saves the current image and reports the outcome. Returns whether it succeeded.
    pub(super) fn save_current(&mut self) -> bool {
        match self.collection.save() {
            Ok(()) => {
                self.status = Status::info("status-saved").with_arg("file", self.file_name());
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    pub(super) fn handle_reload(&mut self) -> Task<Message> {
        self.apply(|collection| collection.reload());
        Task::none()
    }

    pub(super) fn handle_convert(&mut self) -> Task<Message> {
        self.dialog = Some(Dialog::Convert { selected: None });
        Task::none()
    }

    /// Writes a copy of the current pixels next to the current file.
    pub(super) fn handle_apply_convert(&mut self, format: &str) -> Task<Message> {
        let Some(source) = self.collection.current_file().map(Path::to_path_buf) else {
            self.report(&Error::NoImageLoaded);
            return Task::none();
        };

        let destination = media::convert_destination(&source, format);
        match self.collection.save_as(&destination, format) {
            Ok(()) => {
                let name = destination
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.status = Status::info("status-converted").with_arg("file", name);
            }
            Err(err) => {
                log::error!("Cannot convert to {}: {err}", destination.display());
                remove_partial(&destination);
                self.status = Status::error("status-convert-failed")
                    .with_arg("reason", err.to_string());
            }
        }
        Task::none()
    }

    pub(super) fn handle_quit(&mut self) -> Task<Message> {
        log::debug!("Exiting");
        iced::exit()
    }

    pub(super) fn handle_rotate_left(&mut self) -> Task<Message> {
        self.apply(|collection| collection.rotate(-FRAC_PI_2));
        Task::none()
    }

    pub(super) fn handle_rotate_right(&mut self) -> Task<Message> {
        self.apply(|collection| collection.rotate(FRAC_PI_2));
        Task::none()
    }

    pub(super) fn handle_scale(&mut self) -> Task<Message> {
        let (width, height) = self.collection.dimensions().unwrap_or_default();
        self.dialog = Some(Dialog::Scale(ScaleForm::new(width, height)));
        Task::none()
    }

    pub(super) fn handle_apply_scale(&mut self, width: i64, height: i64) -> Task<Message> {
        self.apply(|collection| collection.scale(width, height));
        Task::none()
    }

    pub(super) fn handle_zoom_in(&mut self) -> Task<Message> {
        self.view.zoom_in();
        self.describe_current();
        Task::none()
    }

    pub(super) fn handle_zoom_out(&mut self) -> Task<Message> {
        self.view.zoom_out();
        self.describe_current();
        Task::none()
    }

    pub(super) fn handle_original_size(&mut self) -> Task<Message> {
        self.view.reset();
        self.describe_current();
        Task::none()
    }

    pub(super) fn handle_previous(&mut self) -> Task<Message> {
        self.apply(|collection| collection.prev());
        Task::none()
    }

    pub(super) fn handle_next(&mut self) -> Task<Message> {
        self.apply(|collection| collection.next());
        Task::none()
    }

    pub(super) fn handle_first(&mut self) -> Task<Message> {
        self.apply(|collection| collection.first());
        Task::none()
    }

    pub(super) fn handle_last(&mut self) -> Task<Message> {
        self.apply(|collection| collection.last());
        Task::none()
    }

    pub(super) fn handle_about(&mut self) -> Task<Message> {
        self.dialog = Some(Dialog::About);
        Task::none()
    }

    /// Runs a pixel-changing model operation and redisplays on success.
    fn apply(
        &mut self,
        operation: impl FnOnce(&mut media::ImageCollection) -> crate::error::Result<()>,
    ) {
        match operation(&mut self.collection) {
            Ok(()) => self.show_and_describe(),
            Err(err) => self.report(&err),
        }
    }

    fn show_and_describe(&mut self) {
        self.show_current();
        self.describe_current();
    }

    /// "Image <name>", or the load prompt when nothing is open.
    fn describe_current(&mut self) {
        self.status = if self.collection.is_opened() {
            Status::info("status-image").with_arg("file", self.file_name())
        } else {
            Status::info(EMPTY_STATUS_KEY)
        };
    }

    fn report(&mut self, err: &Error) {
        log::error!("{err}");
        self.status = Status::from_error(err);
    }

    pub(super) fn file_name(&self) -> String {
        self.collection
            .current_file()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn remove_partial(path: &Path) {
    if path.exists() {
        if let Err(err) = fs::remove_file(path) {
            log::warn!("Cannot remove partial file {}: {err}", path.display());
        }
    }
}
