// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs: save confirmation, format selection, scale input and about.
//!
//! A dialog owns only its form state. Results leave through [`Event`] and the
//! application decides what to run next.

use crate::app::action::Action;
use crate::config::MAX_SCALE_DIMENSION;
use crate::i18n::I18n;
use crate::media::CONVERT_EXTENSIONS;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, mouse_area, opaque, pick_list, text_input, Column, Container, Row, Space,
    Stack, Text, TextInput,
};
use iced::{Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// The current image was modified and `pending` would discard it.
    ConfirmSave { pending: Action, file: String },
    Convert { selected: Option<&'static str> },
    Scale(ScaleForm),
    About,
}

/// Raw text of the scale dialog inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaleForm {
    pub width: String,
    pub height: String,
}

impl ScaleForm {
    /// Prefills the inputs with the current dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    /// Both dimensions, when each is an integer in `1..=MAX_SCALE_DIMENSION`.
    pub fn parsed(&self) -> Option<(i64, i64)> {
        Some((parse_dimension(&self.width)?, parse_dimension(&self.height)?))
    }

    pub fn is_valid(&self) -> bool {
        self.parsed().is_some()
    }
}

fn parse_dimension(input: &str) -> Option<i64> {
    let value: i64 = input.trim().parse().ok()?;
    (1..=i64::from(MAX_SCALE_DIMENSION))
        .contains(&value)
        .then_some(value)
}

#[derive(Debug, Clone)]
pub enum Message {
    Cancel,
    SaveChanges,
    DiscardChanges,
    FormatSelected(&'static str),
    SubmitConvert,
    WidthChanged(String),
    HeightChanged(String),
    SubmitScale,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Close,
    /// Save the image, then run the pending action.
    SaveAndContinue(Action),
    /// Drop the in-memory changes and run the pending action.
    DiscardAndContinue(Action),
    Convert(String),
    Scale(i64, i64),
}

/// Process a dialog message and return the corresponding event.
///
/// Messages that do not belong to the open dialog are ignored.
pub fn update(dialog: &mut Dialog, message: Message) -> Event {
    match (dialog, message) {
        (_, Message::Cancel) => Event::Close,
        (Dialog::ConfirmSave { pending, .. }, Message::SaveChanges) => {
            Event::SaveAndContinue(*pending)
        }
        (Dialog::ConfirmSave { pending, .. }, Message::DiscardChanges) => {
            Event::DiscardAndContinue(*pending)
        }
        (Dialog::Convert { selected }, Message::FormatSelected(format)) => {
            *selected = Some(format);
            Event::None
        }
        (Dialog::Convert { selected }, Message::SubmitConvert) => match selected {
            Some(format) => Event::Convert((*format).to_string()),
            None => Event::None,
        },
        (Dialog::Scale(form), Message::WidthChanged(value)) => {
            form.width = value;
            Event::None
        }
        (Dialog::Scale(form), Message::HeightChanged(value)) => {
            form.height = value;
            Event::None
        }
        (Dialog::Scale(form), Message::SubmitScale) => match form.parsed() {
            Some((width, height)) => Event::Scale(width, height),
            None => Event::None,
        },
        _ => Event::None,
    }
}

/// Renders `dialog` centered over `base`, behind a dimmed backdrop.
///
/// Clicking the backdrop cancels the dialog. `on_message` lifts dialog
/// messages into the parent's message type.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    dialog: &'a Dialog,
    i18n: &I18n,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(on_message(Message::Cancel));

    let panel = view(dialog, i18n).map(on_message);

    Stack::new()
        .push(base)
        .push(backdrop)
        .push(center(opaque(panel)))
        .into()
}

/// The dialog panel alone.
pub fn view<'a>(dialog: &'a Dialog, i18n: &I18n) -> Element<'a, Message> {
    let (title, body, width) = match dialog {
        Dialog::ConfirmSave { file, .. } => (
            i18n.tr("dialog-confirm-title"),
            confirm_body(file, i18n),
            sizing::DIALOG_WIDTH,
        ),
        Dialog::Convert { selected } => (
            i18n.tr("dialog-convert-title"),
            convert_body(*selected, i18n),
            sizing::DIALOG_WIDTH,
        ),
        Dialog::Scale(form) => (
            i18n.tr("dialog-scale-title"),
            scale_body(form, i18n),
            sizing::DIALOG_WIDTH,
        ),
        Dialog::About => (
            i18n.tr("dialog-about-title"),
            about_body(i18n),
            sizing::DIALOG_WIDTH_WIDE,
        ),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body);

    Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn confirm_body<'a>(file: &str, i18n: &I18n) -> Element<'a, Message> {
    let question = i18n.tr_with_args("dialog-confirm-message", &[("file", file.to_string())]);

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(question).size(typography::BODY))
        .push(button_row(vec![
            secondary_button(i18n.tr("dialog-cancel"), Some(Message::Cancel)),
            secondary_button(i18n.tr("dialog-no"), Some(Message::DiscardChanges)),
            primary_button(i18n.tr("dialog-yes"), Some(Message::SaveChanges)),
        ]))
        .into()
}

fn convert_body<'a>(selected: Option<&'static str>, i18n: &I18n) -> Element<'a, Message> {
    let picker = pick_list(CONVERT_EXTENSIONS, selected, Message::FormatSelected)
        .placeholder(i18n.tr("dialog-convert-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("dialog-convert-message")).size(typography::BODY))
        .push(picker)
        .push(button_row(vec![
            secondary_button(i18n.tr("dialog-cancel"), Some(Message::Cancel)),
            primary_button(
                i18n.tr("dialog-ok"),
                selected.map(|_| Message::SubmitConvert),
            ),
        ]))
        .into()
}

fn scale_body<'a>(form: &'a ScaleForm, i18n: &I18n) -> Element<'a, Message> {
    let submit = form.is_valid().then_some(Message::SubmitScale);

    let width_placeholder = i18n.tr("dialog-scale-width");
    let width_input = text_input(width_placeholder.as_str(), &form.width)
        .on_input(Message::WidthChanged)
        .on_submit_maybe(submit.clone())
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    let height_placeholder = i18n.tr("dialog-scale-height");
    let height_input = text_input(height_placeholder.as_str(), &form.height)
        .on_input(Message::HeightChanged)
        .on_submit_maybe(submit.clone())
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(labeled(width_placeholder, width_input))
        .push(labeled(height_placeholder, height_input));

    if !form.is_valid() {
        let hint = i18n.tr_with_args(
            "dialog-scale-invalid",
            &[("max", MAX_SCALE_DIMENSION.to_string())],
        );
        column = column.push(
            Text::new(hint)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column
        .push(button_row(vec![
            secondary_button(i18n.tr("dialog-cancel"), Some(Message::Cancel)),
            primary_button(i18n.tr("dialog-ok"), submit),
        ]))
        .into()
}

fn labeled<'a>(label: String, input: TextInput<'a, Message>) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY_SM).width(Length::Fill))
        .push(input)
}

fn about_body<'a>(i18n: &I18n) -> Element<'a, Message> {
    let version = i18n.tr_with_args("dialog-about-version", &[("version", APP_VERSION.to_string())]);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("window-title")).size(typography::BODY_LG))
        .push(Text::new(version).size(typography::BODY_SM))
        .push(Text::new(i18n.tr("dialog-about-origin")).size(typography::BODY_SM))
        .push(Text::new(i18n.tr("dialog-about-author")).size(typography::BODY_SM))
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(button_row(vec![primary_button(
            i18n.tr("dialog-ok"),
            Some(Message::Cancel),
        )]))
        .into()
}

fn button_row<'a>(buttons: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill));
    for btn in buttons {
        row = row.push(btn);
    }
    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}

fn primary_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(on_press)
        .into()
}

fn secondary_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::toolbar)
        .on_press_maybe(on_press)
        .into()
}
