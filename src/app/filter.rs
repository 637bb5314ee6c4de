use eframe::egui;
use image::RgbaImage;

use crate::editor::view::ImageAdjustments;

fn adjust_channel(value: u8, adjustments: ImageAdjustments) -> u8 {
    let v = value as f32 / 255.0 * adjustments.brightness;
    let v = (v - 0.5) * adjustments.contrast + 0.5;
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Applies `brightness(b) contrast(c)` to every color channel. Alpha is kept.
pub(super) fn apply_adjustments(source: &RgbaImage, adjustments: ImageAdjustments) -> RgbaImage {
    if adjustments.is_identity() {
        return source.clone();
    }
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        for c in &mut pixel.0[..3] {
            *c = adjust_channel(*c, adjustments);
        }
    }
    out
}

pub(super) fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}
