// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the toolbar, footer and dialogs.

pub mod button;
pub mod container;
pub mod tooltip;
