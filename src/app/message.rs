// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::action::Action;
use crate::ui::{dialogs, toolbar};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded so there is a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Run an action through the dispatch table.
    Action(Action),
    Toolbar(toolbar::Message),
    Dialog(dialogs::Message),
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Run the conversion once the loading status has been rendered.
    ApplyConvert(String),
    /// Run the scaling once the loading status has been rendered.
    ApplyScale(i64, i64),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
    /// Image to open at startup.
    pub file_path: Option<PathBuf>,
}
