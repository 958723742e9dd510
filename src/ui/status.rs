// SPDX-License-Identifier: MPL-2.0
//! Status line shown in the footer.
//!
//! A status holds an i18n key and its arguments; the text is resolved at
//! render time so it follows the active locale.

use crate::config::STATUS_ICON_SCALE;
use crate::error::Error;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::IconCache;
use iced::alignment::Vertical;
use iced::widget::{image, Row, Text};
use iced::{Color, Element, Length};

/// Severity determines the icon and the text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    /// A long-running operation is in progress.
    Loading,
}

impl Severity {
    /// Name of the icon drawn before the status text.
    pub fn icon_name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Loading => "loading",
        }
    }

    /// Text color; `None` keeps the theme default.
    pub fn color(self) -> Option<Color> {
        match self {
            Severity::Warning | Severity::Error => Some(palette::ERROR_500),
            Severity::Info | Severity::Loading => None,
        }
    }

    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Loading,
    ];
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Status {
    severity: Severity,
    message_key: Option<String>,
    message_args: Vec<(&'static str, String)>,
}

impl Status {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: Some(message_key.into()),
            message_args: Vec::new(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn loading(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Loading, message_key)
    }

    /// Adds a named argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.message_args.push((name, value.into()));
        self
    }

    /// Error status carrying the error's own message key and arguments.
    pub fn from_error(error: &Error) -> Self {
        Self {
            severity: Severity::Error,
            message_key: Some(error.i18n_key().to_string()),
            message_args: error.i18n_args(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> Option<&str> {
        self.message_key.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.message_key.is_none()
    }

    /// Resolves the message in the active locale.
    pub fn text(&self, i18n: &I18n) -> String {
        match &self.message_key {
            Some(key) if self.message_args.is_empty() => i18n.tr(key),
            Some(key) => i18n.tr_with_args(key, &self.message_args),
            None => String::new(),
        }
    }

    /// Icon followed by the message, red for warnings and errors.
    pub fn view<'a, Message: 'a>(&self, i18n: &I18n, icons: &IconCache) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
        if self.is_empty() {
            return row.into();
        }

        if let Some(icon) = icons.cached(self.severity.icon_name(), STATUS_ICON_SCALE) {
            row = row.push(
                image(icon.handle.clone())
                    .width(Length::Fixed(sizing::STATUS_ICON))
                    .height(Length::Fixed(sizing::STATUS_ICON)),
            );
        }

        let mut label = Text::new(self.text(i18n)).size(typography::CAPTION);
        if let Some(color) = self.severity.color() {
            label = label.color(color);
        }
        row.push(label).into()
    }
}
