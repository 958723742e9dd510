// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `view`, and those with state an `update` returning an
//! `Event` for the application to act on.
//!
//! - [`toolbar`] - Icon toolbar and the grouped action menu
//! - [`image_view`] - Zoomable image surface
//! - [`status`] - Footer status line
//! - [`dialogs`] - Save confirmation, convert, scale and about dialogs
//! - [`icons`] - Bundled icon lookup and cache
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialogs;
pub mod icons;
pub mod image_view;
pub mod status;
pub mod styles;
pub mod toolbar;
