// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: View zoom step and bounds
//! - **Icons**: Bundled icon pixel scales
//! - **Scale dialog**: Input bounds for the scale dialog
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Multiplier applied to the displayed size by one zoom step.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;

/// Smallest accepted zoom step multiplier.
pub const MIN_ZOOM_FACTOR: f64 = 1.1;

/// Largest accepted zoom step multiplier.
pub const MAX_ZOOM_FACTOR: f64 = 3.0;

/// Zoom in stays available while displayed/original is below this ratio.
pub const MAX_ZOOM_SCALE: f64 = 5.0;

/// Zoom out stays available while displayed/original is above this ratio.
pub const MIN_ZOOM_SCALE: f64 = 0.2;

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Pixel scale used when an icon is requested without one.
pub const DEFAULT_ICON_SCALE: u32 = 16;

/// Pixel scale of the status line icons.
pub const STATUS_ICON_SCALE: u32 = 12;

/// Pixel scale of the rasterized window icon.
pub const WINDOW_ICON_SCALE: u32 = 128;

// ==========================================================================
// Scale Dialog Defaults
// ==========================================================================

/// Largest width or height accepted by the scale dialog.
pub const MAX_SCALE_DIMENSION: u32 = 16_384;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_FACTOR > 1.0);
    assert!(MAX_ZOOM_FACTOR > MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR <= MAX_ZOOM_FACTOR);

    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MIN_ZOOM_SCALE < 1.0);
    assert!(MAX_ZOOM_SCALE > 1.0);

    assert!(STATUS_ICON_SCALE > 0);
    assert!(DEFAULT_ICON_SCALE > 0);

    assert!(MAX_SCALE_DIMENSION > 0);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
