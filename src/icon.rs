// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the bundled `icon` entry through the icon cache to produce an
//! RGBA icon for the window title bar. Falls back to `None` if rendering fails.

use crate::config::WINDOW_ICON_SCALE;
use crate::ui::icons::IconCache;
use iced::window::{icon, Icon};

/// Name of the application icon in the bundled icon namespace.
pub const APP_ICON: &str = "icon";

pub fn load_window_icon(icons: &mut IconCache) -> Option<Icon> {
    let rendered = match icons.get_scaled(APP_ICON, WINDOW_ICON_SCALE) {
        Ok(rendered) => rendered,
        Err(err) => {
            log::warn!("No window icon: {err}");
            return None;
        }
    };

    icon::from_rgba(rendered.pixels.clone(), rendered.width, rendered.height)
        .map_err(|err| log::warn!("Invalid window icon: {err}"))
        .ok()
}
