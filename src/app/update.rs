// SPDX-License-Identifier: MPL-2.0
//! Update logic and the action dispatch table.
//!
//! Toolbar buttons, menu entries, keyboard shortcuts and dialog results all
//! resolve to an [`Action`] and run through [`App::dispatch`], which checks
//! enablement and unsaved changes before looking up the handler.

use super::action::Action;
use super::{App, Message};
use crate::ui::dialogs::{self, Dialog, Event as DialogEvent};
use crate::ui::status::Status;
use crate::ui::toolbar::{self, Event as ToolbarEvent};
use iced::Task;

type Handler = fn(&mut App) -> Task<Message>;

/// Every action and the handler that runs it.
const HANDLERS: &[(Action, Handler)] = &[
    (Action::Open, App::handle_open),
    (Action::Save, App::handle_save),
    (Action::Reload, App::handle_reload),
    (Action::Convert, App::handle_convert),
    (Action::Quit, App::handle_quit),
    (Action::RotateLeft, App::handle_rotate_left),
    (Action::RotateRight, App::handle_rotate_right),
    (Action::Scale, App::handle_scale),
    (Action::ZoomIn, App::handle_zoom_in),
    (Action::ZoomOut, App::handle_zoom_out),
    (Action::OriginalSize, App::handle_original_size),
    (Action::Previous, App::handle_previous),
    (Action::Next, App::handle_next),
    (Action::First, App::handle_first),
    (Action::Last, App::handle_last),
    (Action::About, App::handle_about),
];

fn handler_for(action: Action) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(candidate, _)| *candidate == action)
        .map(|(_, handler)| *handler)
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Action(action) => {
                // Shortcuts are inert while a dialog is up.
                if self.dialog.is_some() {
                    return Task::none();
                }
                self.dispatch(action)
            }
            Message::Toolbar(toolbar_message) => {
                match toolbar::update(toolbar_message, &mut self.menu_open) {
                    ToolbarEvent::None => Task::none(),
                    ToolbarEvent::Action(action) => self.dispatch(action),
                }
            }
            Message::Dialog(dialog_message) => self.handle_dialog_message(dialog_message),
            Message::OpenDialogResult(path) => self.handle_open_dialog_result(path),
            Message::FileDropped(path) => {
                if self.dialog.is_some() {
                    return Task::none();
                }
                self.open_path(&path)
            }
            Message::ApplyConvert(format) => self.handle_apply_convert(&format),
            Message::ApplyScale(width, height) => self.handle_apply_scale(width, height),
            Message::WindowCloseRequested => self.dispatch(Action::Quit),
        }
    }

    /// Runs `action` if it is enabled, asking to save first when it would
    /// discard unsaved changes.
    pub fn dispatch(&mut self, action: Action) -> Task<Message> {
        self.menu_open = false;

        if !action.is_enabled(&self.availability()) {
            log::debug!("Ignoring disabled action {action:?}");
            return Task::none();
        }

        if action.discards_changes() && self.collection.is_modified() {
            self.dialog = Some(Dialog::ConfirmSave {
                pending: action,
                file: self.file_name(),
            });
            return Task::none();
        }

        self.run(action)
    }

    fn run(&mut self, action: Action) -> Task<Message> {
        log::debug!("Dispatching {action:?}");
        match handler_for(action) {
            Some(handler) => handler(self),
            None => Task::none(),
        }
    }

    fn handle_dialog_message(&mut self, message: dialogs::Message) -> Task<Message> {
        let Some(dialog) = self.dialog.as_mut() else {
            return Task::none();
        };

        match dialogs::update(dialog, message) {
            DialogEvent::None => Task::none(),
            DialogEvent::Close => {
                self.dialog = None;
                Task::none()
            }
            DialogEvent::SaveAndContinue(action) => {
                self.dialog = None;
                if self.save_current() {
                    self.run(action)
                } else {
                    Task::none()
                }
            }
            DialogEvent::DiscardAndContinue(action) => {
                self.dialog = None;
                self.run(action)
            }
            DialogEvent::Convert(format) => {
                self.dialog = None;
                self.status = Status::loading("status-converting").with_arg("format", &*format);
                Task::done(Message::ApplyConvert(format))
            }
            DialogEvent::Scale(width, height) => {
                self.dialog = None;
                self.status = Status::loading("status-scaling")
                    .with_arg("width", width.to_string())
                    .with_arg("height", height.to_string());
                Task::done(Message::ApplyScale(width, height))
            }
        }
    }
}
