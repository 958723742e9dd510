// SPDX-License-Identifier: MPL-2.0
//! `iced_photoview` is a small photo viewer built with the Iced GUI framework.
//!
//! Open an image, page through the other images of its directory, zoom,
//! rotate and scale it, then save it or convert it to another format.

#![doc(html_root_url = "https://docs.rs/iced_photoview/0.1.0")]

pub mod app;
pub mod cli;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
