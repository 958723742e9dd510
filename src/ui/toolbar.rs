// SPDX-License-Identifier: MPL-2.0
//! Toolbar with a menu button and icon buttons for the most used actions.
//!
//! The dropdown menu lists every action with its label and shortcut, grouped
//! the way a classic menu bar would group them.

use crate::app::action::{Action, Availability, Group};
use crate::config::DEFAULT_ICON_SCALE;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::IconCache;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, image, rule, tooltip, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Actions with a toolbar button, in display order. `None` is a separator.
const TOOLBAR_LAYOUT: &[Option<Action>] = &[
    Some(Action::Open),
    Some(Action::Save),
    None,
    Some(Action::First),
    Some(Action::Previous),
    Some(Action::Next),
    Some(Action::Last),
    None,
    Some(Action::RotateLeft),
    Some(Action::RotateRight),
    Some(Action::Scale),
    None,
    Some(Action::ZoomIn),
    Some(Action::ZoomOut),
    Some(Action::OriginalSize),
];

const MENU_GROUPS: [Group; 5] = [Group::File, Group::Image, Group::View, Group::Go, Group::Help];

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub icons: &'a IconCache,
    pub availability: Availability,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Trigger(Action),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Action(Action),
}

/// Process a toolbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Trigger(action) => {
            *menu_open = false;
            Event::Action(action)
        }
    }
}

/// Icon names the toolbar and menu render.
pub fn icon_names() -> impl Iterator<Item = &'static str> {
    Action::ALL.into_iter().map(Action::icon_name)
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new(ctx.i18n.tr("toolbar-menu")).size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.menu_open {
            styles::button::primary
        } else {
            styles::button::toolbar
        });

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .padding(spacing::XXS)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(separator());

    for slot in TOOLBAR_LAYOUT {
        row = match slot {
            Some(action) => row.push(tool_button(ctx, *action)),
            None => row.push(separator()),
        };
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

/// Dropdown listing every action; drawn by the parent as an overlay.
pub fn menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    for (index, group) in MENU_GROUPS.into_iter().enumerate() {
        if index > 0 {
            column = column.push(rule::horizontal(1));
        }
        for action in Action::ALL.into_iter().filter(|a| a.group() == group) {
            column = column.push(menu_item(ctx, action));
        }
    }

    Container::new(column)
        .width(Length::Fixed(sizing::DIALOG_WIDTH * 0.75))
        .padding(spacing::XS)
        .style(styles::container::menu)
        .into()
}

fn tool_button<'a>(ctx: &ViewContext<'a>, action: Action) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.icons.cached(action.icon_name(), DEFAULT_ICON_SCALE)
    {
        Some(icon) => image(icon.handle.clone())
            .width(Length::Fixed(sizing::ICON_SM))
            .height(Length::Fixed(sizing::ICON_SM))
            .into(),
        None => Text::new(ctx.i18n.tr(action.label_key()))
            .size(typography::CAPTION)
            .into(),
    };

    let enabled = action.is_enabled(&ctx.availability);
    let btn = button(content)
        .padding(spacing::XS)
        .style(styles::button::toolbar)
        .on_press_maybe(enabled.then_some(Message::Trigger(action)));

    styles::tooltip::styled(btn, tooltip_text(ctx.i18n, action), tooltip::Position::Bottom).into()
}

fn menu_item<'a>(ctx: &ViewContext<'a>, action: Action) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    if let Some(icon) = ctx.icons.cached(action.icon_name(), DEFAULT_ICON_SCALE) {
        row = row.push(
            image(icon.handle.clone())
                .width(Length::Fixed(sizing::ICON_SM))
                .height(Length::Fixed(sizing::ICON_SM)),
        );
    }

    row = row
        .push(Text::new(ctx.i18n.tr(action.label_key())).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(action.shortcut_label()).size(typography::CAPTION));

    let enabled = action.is_enabled(&ctx.availability);
    button(row)
        .on_press_maybe(enabled.then_some(Message::Trigger(action)))
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}

fn tooltip_text(i18n: &I18n, action: Action) -> String {
    let label = i18n.tr(action.label_key());
    match action.shortcut_label() {
        "" => label,
        shortcut => format!("{label} ({shortcut})"),
    }
}

fn separator<'a>() -> Element<'a, Message> {
    Container::new(rule::vertical(1))
        .height(Length::Fixed(sizing::ICON_MD))
        .padding([0.0, spacing::XXS])
        .into()
}
