// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for rotate and resize operations.

use crate::config::ResampleFilter;
use image_rs::{imageops::FilterType, DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::f64::consts::FRAC_PI_2;

/// Tolerance used to recognize an angle as a multiple of a quarter turn.
const QUARTER_TURN_EPSILON: f64 = 1e-9;

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Rotate an image 90 degrees counter-clockwise (left).
pub fn rotate_left(image: &DynamicImage) -> DynamicImage {
    image.rotate270()
}

/// Rotate an image 90 degrees clockwise (right).
pub fn rotate_right(image: &DynamicImage) -> DynamicImage {
    image.rotate90()
}

/// Returns the number of clockwise quarter turns (0..4) when `radians` is a
/// multiple of a right angle.
pub fn quarter_turns(radians: f64) -> Option<u8> {
    let turns = radians / FRAC_PI_2;
    let rounded = turns.round();
    if (radians - rounded * FRAC_PI_2).abs() < QUARTER_TURN_EPSILON {
        Some((rounded as i64).rem_euclid(4) as u8)
    } else {
        None
    }
}

/// Rotates `image` about its center by `radians`, clockwise on screen for
/// positive angles.
///
/// Quarter turns permute pixels exactly. Other angles grow the canvas to the
/// bounding box of the rotated image and leave uncovered pixels transparent.
/// `radians` must be finite.
pub fn rotate(image: &DynamicImage, radians: f64, filter: ResampleFilter) -> DynamicImage {
    debug_assert!(radians.is_finite());
    match quarter_turns(radians) {
        Some(0) => image.clone(),
        Some(1) => rotate_right(image),
        Some(2) => image.rotate180(),
        Some(_) => rotate_left(image),
        None => DynamicImage::ImageRgba8(rotate_arbitrary(&image.to_rgba8(), radians, filter)),
    }
}

fn rotate_arbitrary(source: &RgbaImage, radians: f64, filter: ResampleFilter) -> RgbaImage {
    let (src_w, src_h) = (source.width() as f64, source.height() as f64);
    let (sin, cos) = radians.sin_cos();

    let dst_w = (src_w * cos.abs() + src_h * sin.abs()).ceil().max(1.0);
    let dst_h = (src_w * sin.abs() + src_h * cos.abs()).ceil().max(1.0);

    let (src_cx, src_cy) = (src_w / 2.0, src_h / 2.0);
    let (dst_cx, dst_cy) = (dst_w / 2.0, dst_h / 2.0);

    RgbaImage::from_fn(dst_w as u32, dst_h as u32, |x, y| {
        // Inverse mapping from the destination pixel center into the source.
        let dx = x as f64 + 0.5 - dst_cx;
        let dy = y as f64 + 0.5 - dst_cy;
        let sx = dx * cos + dy * sin + src_cx;
        let sy = -dx * sin + dy * cos + src_cy;

        match filter {
            ResampleFilter::Nearest => sample_nearest(source, sx, sy),
            _ => sample_bilinear(source, sx, sy),
        }
    })
}

fn sample_nearest(source: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    pixel_or_transparent(source, x.floor() as i64, y.floor() as i64)
}

fn sample_bilinear(source: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (x, y) = (x - 0.5, y - 0.5);
    let (x0, y0) = (x.floor(), y.floor());
    let (fx, fy) = (x - x0, y - y0);
    let (x0, y0) = (x0 as i64, y0 as i64);

    let corners = [
        (pixel_or_transparent(source, x0, y0), (1.0 - fx) * (1.0 - fy)),
        (pixel_or_transparent(source, x0 + 1, y0), fx * (1.0 - fy)),
        (pixel_or_transparent(source, x0, y0 + 1), (1.0 - fx) * fy),
        (pixel_or_transparent(source, x0 + 1, y0 + 1), fx * fy),
    ];

    let mut channels = [0.0f64; 4];
    for (pixel, weight) in corners {
        for (acc, value) in channels.iter_mut().zip(pixel.0) {
            *acc += f64::from(value) * weight;
        }
    }
    Rgba(channels.map(|value| value.round().clamp(0.0, 255.0) as u8))
}

fn pixel_or_transparent(source: &RgbaImage, x: i64, y: i64) -> Rgba<u8> {
    if x < 0 || y < 0 || x >= i64::from(source.width()) || y >= i64::from(source.height()) {
        return Rgba([0, 0, 0, 0]);
    }
    *source.get_pixel(x as u32, y as u32)
}

/// Resize the image to the provided dimensions.
pub fn resize(image: &DynamicImage, width: u32, height: u32, filter: ResampleFilter) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, filter.filter_type())
}

/// Converts pixels to a colour type the encoder for `format` accepts.
pub fn prepare_for_encoding(image: &DynamicImage, format: ImageFormat) -> DynamicImage {
    let has_alpha = image.color().has_alpha();
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        ImageFormat::Gif | ImageFormat::WebP => DynamicImage::ImageRgba8(image.to_rgba8()),
        ImageFormat::Bmp if has_alpha => DynamicImage::ImageRgba8(image.to_rgba8()),
        ImageFormat::Bmp => DynamicImage::ImageRgb8(image.to_rgb8()),
        // The TIFF encoder has no gray+alpha layout.
        ImageFormat::Tiff => match image {
            DynamicImage::ImageLumaA8(_) => DynamicImage::ImageRgba8(image.to_rgba8()),
            DynamicImage::ImageLumaA16(_) => DynamicImage::ImageRgba16(image.to_rgba16()),
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb16(image.to_rgb16()),
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba16(image.to_rgba16()),
            _ => image.clone(),
        },
        _ => match image {
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb16(image.to_rgb16()),
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba16(image.to_rgba16()),
            _ => image.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{GenericImageView, Rgb, RgbImage};
    use std::f64::consts::PI;

    fn sample_image(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbaImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 40) as u8, (y * 40) as u8, 128, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn quarter_turns_detects_multiples() {
        assert_eq!(quarter_turns(0.0), Some(0));
        assert_eq!(quarter_turns(FRAC_PI_2), Some(1));
        assert_eq!(quarter_turns(-FRAC_PI_2), Some(3));
        assert_eq!(quarter_turns(PI), Some(2));
        assert_eq!(quarter_turns(5.0 * FRAC_PI_2), Some(1));
        assert_eq!(quarter_turns(0.3), None);
    }

    #[test]
    fn rotate_right_swaps_dimensions_and_moves_top_left_to_top_right() {
        let img = sample_image(4, 2);
        let rotated = rotate(&img, FRAC_PI_2, ResampleFilter::Lanczos3);
        assert_eq!(rotated.dimensions(), (2, 4));
        assert_eq!(rotated.get_pixel(1, 0), img.get_pixel(0, 0));
    }

    #[test]
    fn rotate_left_moves_top_left_to_bottom_left() {
        let img = sample_image(4, 2);
        let rotated = rotate(&img, -FRAC_PI_2, ResampleFilter::Lanczos3);
        assert_eq!(rotated.dimensions(), (2, 4));
        assert_eq!(rotated.get_pixel(0, 3), img.get_pixel(0, 0));
    }

    #[test]
    fn four_quarter_turns_restore_pixels() {
        let img = sample_image(5, 3);
        let mut rotated = img.clone();
        for _ in 0..4 {
            rotated = rotate(&rotated, FRAC_PI_2, ResampleFilter::Nearest);
        }
        assert_eq!(rotated.dimensions(), (5, 3));
        assert_eq!(rotated.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn arbitrary_rotation_grows_canvas_to_bounding_box() {
        let img = sample_image(10, 10);
        let rotated = rotate(&img, PI / 4.0, ResampleFilter::Triangle);
        // 10 * sqrt(2) = 14.14..
        assert_eq!(rotated.dimensions(), (15, 15));
        // Corners fall outside the source square.
        assert_eq!(rotated.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(rotated.get_pixel(7, 7).0[3], 255);
    }

    #[test]
    fn nearest_rotation_copies_source_values() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 6, Rgba([9, 8, 7, 255])));
        let rotated = rotate(&img, 0.2, ResampleFilter::Nearest);
        let center = rotated.get_pixel(rotated.width() / 2, rotated.height() / 2);
        assert_eq!(center, Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn resize_uses_exact_dimensions() {
        let img = sample_image(8, 4);
        let resized = resize(&img, 3, 9, ResampleFilter::Lanczos3);
        assert_eq!(resized.dimensions(), (3, 9));
    }

    #[test]
    fn resize_clamps_to_one_pixel() {
        let img = sample_image(8, 4);
        let resized = resize(&img, 0, 0, ResampleFilter::Nearest);
        assert_eq!(resized.dimensions(), (1, 1));
    }

    #[test]
    fn jpeg_encoding_drops_alpha() {
        let img = sample_image(2, 2);
        let prepared = prepare_for_encoding(&img, ImageFormat::Jpeg);
        assert!(!prepared.color().has_alpha());
    }

    #[test]
    fn tiff_widens_gray_alpha_to_rgba() {
        let gray = DynamicImage::ImageLumaA8(image_rs::GrayAlphaImage::new(2, 2));
        let prepared = prepare_for_encoding(&gray, ImageFormat::Tiff);
        assert!(matches!(prepared, DynamicImage::ImageRgba8(_)));

        let gray16 = DynamicImage::ImageLumaA16(image_rs::ImageBuffer::new(2, 2));
        let prepared = prepare_for_encoding(&gray16, ImageFormat::Tiff);
        assert!(matches!(prepared, DynamicImage::ImageRgba16(_)));

        let gray = DynamicImage::ImageLuma8(image_rs::GrayImage::new(2, 2));
        let prepared = prepare_for_encoding(&gray, ImageFormat::Tiff);
        assert!(matches!(prepared, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn bmp_keeps_rgb_without_alpha() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let prepared = prepare_for_encoding(&img, ImageFormat::Bmp);
        assert!(matches!(prepared, DynamicImage::ImageRgb8(_)));
    }
}
