// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: toolbar, image surface, footer. The dropdown menu
//! and modal dialogs are stacked above that column.

use super::action::Availability;
use super::Message;
use crate::i18n::I18n;
use crate::media::ImageCollection;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::dialogs::{self, Dialog};
use crate::ui::icons::IconCache;
use crate::ui::image_view::ImageView;
use crate::ui::status::Status;
use crate::ui::styles;
use crate::ui::toolbar;
use iced::alignment::Vertical;
use iced::widget::{mouse_area, rule, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub icons: &'a IconCache,
    pub collection: &'a ImageCollection,
    pub image_view: &'a ImageView,
    pub status: &'a Status,
    pub dialog: Option<&'a Dialog>,
    pub menu_open: bool,
    pub availability: Availability,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar_ctx = toolbar::ViewContext {
        i18n: ctx.i18n,
        icons: ctx.icons,
        availability: ctx.availability,
        menu_open: ctx.menu_open,
    };

    let placeholder = Text::new(ctx.i18n.tr("status-load-image")).size(typography::BODY_LG);

    let main = Column::new()
        .push(toolbar::view(&toolbar_ctx).map(Message::Toolbar))
        .push(rule::horizontal(1))
        .push(
            Container::new(ctx.image_view.view(placeholder.into()))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(rule::horizontal(1))
        .push(footer(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut content: Element<'_, Message> = main.into();

    if ctx.menu_open {
        content = with_menu(content, &toolbar_ctx);
    }

    match ctx.dialog {
        Some(dialog) => dialogs::modal(content, dialog, ctx.i18n, Message::Dialog),
        None => content,
    }
}

/// Status on the left; size, zoom and position on the right.
fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XXS, spacing::XS])
        .align_y(Vertical::Center)
        .push(ctx.status.view(ctx.i18n, ctx.icons))
        .push(Space::new().width(Length::Fill));

    for stat in footer_stats(ctx.collection, ctx.image_view) {
        row = row
            .push(rule::vertical(1))
            .push(Text::new(stat).size(typography::CAPTION));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Shrink)
        .style(styles::container::bar)
        .into()
}

/// `W×H`, `NN%` and `index/count` of the open image; empty when nothing is open.
pub fn footer_stats(collection: &ImageCollection, image_view: &ImageView) -> Vec<String> {
    let (Some((width, height)), Some(index)) =
        (collection.dimensions(), collection.index_of_image())
    else {
        return Vec::new();
    };

    let zoom = (image_view.current_scale() * 100.0).round() as i64;
    vec![
        format!("{width}x{height}"),
        format!("{zoom}%"),
        format!("{}/{}", index + 1, collection.count_of_images()),
    ]
}

/// Draws the dropdown under the menu button; clicking elsewhere closes it.
fn with_menu<'a>(
    content: Element<'a, Message>,
    toolbar_ctx: &toolbar::ViewContext<'a>,
) -> Element<'a, Message> {
    let dismiss = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::Toolbar(toolbar::Message::CloseMenu));

    let menu = Container::new(toolbar::menu(toolbar_ctx).map(Message::Toolbar)).padding(
        Padding {
            top: typography::BODY + spacing::MD + spacing::XS,
            left: spacing::XXS,
            ..Padding::ZERO
        },
    );

    Stack::new().push(content).push(dismiss).push(menu).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResampleFilter, SortOrder};
    use image_rs::RgbaImage;
    use tempfile::tempdir;

    #[test]
    fn footer_is_empty_without_image() {
        let collection = ImageCollection::default();
        assert!(footer_stats(&collection, &ImageView::default()).is_empty());
    }

    #[test]
    fn footer_shows_size_zoom_and_position() {
        let dir = tempdir().expect("temp dir");
        for name in ["a.png", "b.png"] {
            RgbaImage::new(30, 20)
                .save(dir.path().join(name))
                .expect("write fixture");
        }

        let mut collection = ImageCollection::new(SortOrder::Alphabetical, ResampleFilter::Nearest);
        collection.open(&dir.path().join("b.png")).expect("open");
        let mut image_view = ImageView::default();
        if let Some(pixels) = collection.pixels() {
            image_view.display(pixels);
        }
        image_view.zoom_in();

        assert_eq!(
            footer_stats(&collection, &image_view),
            vec!["30x20".to_string(), "150%".to_string(), "2/2".to_string()]
        );
    }
}
