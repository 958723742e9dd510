// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the fixed scales the toolbar, footer and dialogs draw from.
//!
//! ```
//! use iced_photoview::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

// -- color palette

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// -- opacity scale

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Dialog panels.
    pub const SURFACE: f32 = 0.95;
}

// -- spacing scale (8px baseline grid)

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// -- sizing scale

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Footer status line
    pub const STATUS_ICON: f32 = 12.0;

    // Dialog widths
    pub const DIALOG_WIDTH: f32 = 360.0;
    pub const DIALOG_WIDTH_WIDE: f32 = 440.0;
    pub const NUMBER_INPUT_WIDTH: f32 = 96.0;
}

// -- typography scale

pub mod typography {
    /// Dialog titles
    pub const TITLE_SM: f32 = 18.0;

    /// Empty-state prompt, about dialog heading
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Dialog field labels
    pub const BODY_SM: f32 = 13.0;

    /// Footer text, shortcut hints
    pub const CAPTION: f32 = 12.0;
}

// -- border scale

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// -- border radius scale

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

// -- shadow definitions

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// -- compile-time validation

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::ICON_SM > sizing::STATUS_ICON);
    assert!(sizing::DIALOG_WIDTH_WIDE > sizing::DIALOG_WIDTH);

    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(radius::LG > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn rendered_icon_sizes_match_rasterized_scales() {
        assert_eq!(sizing::ICON_SM as u32, crate::config::DEFAULT_ICON_SCALE);
        assert_eq!(sizing::STATUS_ICON as u32, crate::config::STATUS_ICON_SCALE);
    }
}
