// SPDX-License-Identifier: MPL-2.0
//! Zoomable image surface.
//!
//! Holds the render handle of the current pixels and the displayed size.
//! Zoom never touches the pixels: it only changes the size the image widget
//! is laid out at, with nearest-neighbour sampling.

use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use crate::media::ImageData;
use crate::ui::design_tokens::spacing;
use iced::widget::image::FilterMethod;
use iced::widget::{center, container, image, scrollable};
use iced::{ContentFit, Element, Length};
use image_rs::DynamicImage;

#[derive(Debug, Clone)]
pub struct ImageView {
    image: Option<ImageData>,
    displayed: (u32, u32),
    zoom_factor: f64,
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_FACTOR)
    }
}

impl ImageView {
    pub fn new(zoom_factor: f64) -> Self {
        Self {
            image: None,
            displayed: (0, 0),
            zoom_factor,
        }
    }

    /// Shows new pixels at their original size.
    pub fn display(&mut self, pixels: &DynamicImage) {
        let data = ImageData::from_dynamic(pixels);
        self.displayed = (data.width, data.height);
        self.image = Some(data);
    }

    pub fn clear(&mut self) {
        self.image = None;
        self.displayed = (0, 0);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Back to 1:1.
    pub fn reset(&mut self) {
        if let Some(data) = &self.image {
            self.displayed = (data.width, data.height);
        }
    }

    pub fn zoom_in(&mut self) {
        if !self.has_zoom_in() {
            return;
        }
        let factor = self.zoom_factor;
        let (w, h) = self.displayed;
        self.displayed = (
            (f64::from(w) * factor) as u32,
            (f64::from(h) * factor) as u32,
        );
    }

    pub fn zoom_out(&mut self) {
        if !self.has_zoom_out() {
            return;
        }
        let factor = self.zoom_factor;
        let (w, h) = self.displayed;
        self.displayed = (
            ((f64::from(w) / factor) as u32).max(1),
            ((f64::from(h) / factor) as u32).max(1),
        );
    }

    pub fn has_zoom_in(&self) -> bool {
        self.ratios()
            .is_some_and(|(rw, rh)| rw < MAX_ZOOM_SCALE && rh < MAX_ZOOM_SCALE)
    }

    pub fn has_zoom_out(&self) -> bool {
        self.ratios()
            .is_some_and(|(rw, rh)| rw > MIN_ZOOM_SCALE && rh > MIN_ZOOM_SCALE)
    }

    /// Displayed width over original width; 1.0 when nothing is shown.
    pub fn current_scale(&self) -> f64 {
        self.ratios().map_or(1.0, |(rw, _)| rw)
    }

    pub fn displayed_size(&self) -> (u32, u32) {
        self.displayed
    }

    fn ratios(&self) -> Option<(f64, f64)> {
        let data = self.image.as_ref()?;
        if data.width == 0 || data.height == 0 {
            return None;
        }
        Some((
            f64::from(self.displayed.0) / f64::from(data.width),
            f64::from(self.displayed.1) / f64::from(data.height),
        ))
    }

    /// Scrollable view of the image at its displayed size, or `placeholder`.
    pub fn view<'a, Message: 'a>(
        &'a self,
        placeholder: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let Some(data) = &self.image else {
            return center(placeholder).into();
        };

        let (w, h) = self.displayed;
        let picture = image(data.handle.clone())
            .width(Length::Fixed(w as f32))
            .height(Length::Fixed(h as f32))
            .content_fit(ContentFit::Fill)
            .filter_method(FilterMethod::Nearest);

        let surface = scrollable(container(picture).padding(spacing::XS))
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::default(),
                horizontal: scrollable::Scrollbar::default(),
            })
            .width(Length::Shrink)
            .height(Length::Shrink);

        center(surface).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::RgbaImage;

    fn assert_scale(view: &ImageView, expected: f64) {
        let actual = view.current_scale();
        assert!((actual - expected).abs() < 1e-9, "scale {actual} != {expected}");
    }

    fn view_with(width: u32, height: u32) -> ImageView {
        let mut view = ImageView::default();
        view.display(&DynamicImage::ImageRgba8(RgbaImage::new(width, height)));
        view
    }

    #[test]
    fn empty_view_has_no_zoom() {
        let view = ImageView::default();
        assert!(!view.has_zoom_in());
        assert!(!view.has_zoom_out());
        assert_scale(&view, 1.0);
    }

    #[test]
    fn zoom_in_multiplies_and_truncates() {
        let mut view = view_with(101, 33);
        view.zoom_in();
        assert_eq!(view.displayed_size(), (151, 49));
        assert_scale(&view, 151.0 / 101.0);
    }

    #[test]
    fn zoom_out_floors_at_one_pixel() {
        let mut view = view_with(1, 300);
        view.zoom_out();
        assert_eq!(view.displayed_size(), (1, 200));
    }

    #[test]
    fn zoom_in_stops_at_five_times() {
        let mut view = view_with(100, 100);
        let mut steps = 0;
        while view.has_zoom_in() {
            view.zoom_in();
            steps += 1;
        }
        // 100 -> 150 -> 225 -> 337 -> 505
        assert_eq!(steps, 4);
        assert_eq!(view.displayed_size(), (505, 505));

        view.zoom_in();
        assert_eq!(view.displayed_size(), (505, 505));
    }

    #[test]
    fn zoom_out_stops_at_one_fifth() {
        let mut view = view_with(100, 100);
        while view.has_zoom_out() {
            view.zoom_out();
        }
        // 100 -> 66 -> 44 -> 29 -> 19
        assert_eq!(view.displayed_size(), (19, 19));
        assert_scale(&view, 0.19);
    }

    #[test]
    fn reset_returns_to_original_size() {
        let mut view = view_with(40, 20);
        view.zoom_in();
        view.zoom_in();
        view.reset();
        assert_eq!(view.displayed_size(), (40, 20));
        assert_scale(&view, 1.0);
    }

    #[test]
    fn display_resets_zoom() {
        let mut view = view_with(40, 20);
        view.zoom_out();
        view.display(&DynamicImage::ImageRgba8(RgbaImage::new(10, 10)));
        assert_eq!(view.displayed_size(), (10, 10));
    }

    #[test]
    fn custom_zoom_factor_is_used() {
        let mut view = ImageView::new(2.0);
        view.display(&DynamicImage::ImageRgba8(RgbaImage::new(10, 10)));
        view.zoom_in();
        assert_eq!(view.displayed_size(), (20, 20));
    }

    #[test]
    fn clear_drops_image() {
        let mut view = view_with(4, 4);
        view.clear();
        assert!(!view.has_image());
        assert_eq!(view.displayed_size(), (0, 0));
    }
}
