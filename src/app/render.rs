use eframe::egui;

use crate::editor::Editor;
use crate::model::Point;

use super::settings::AppSettings;

const LABEL_OFFSET: egui::Vec2 = egui::vec2(5.0, -5.0);
const PENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 160, 255);
const ERASER_TINT: egui::Color32 = egui::Color32::from_rgb(230, 70, 70);

fn parse_hex(hex: &str) -> Option<egui::Color32> {
    let digits = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(egui::Color32::from_rgb(
            digits(hex.get(0..2)?)?,
            digits(hex.get(2..4)?)?,
            digits(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

/// Parses `#rgb`, `#rrggbb` or a basic CSS color name.
pub(super) fn parse_color(value: &str) -> Option<egui::Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let color = match value.to_ascii_lowercase().as_str() {
        "black" => egui::Color32::BLACK,
        "white" => egui::Color32::WHITE,
        "red" => egui::Color32::from_rgb(255, 0, 0),
        "green" => egui::Color32::from_rgb(0, 128, 0),
        "lime" => egui::Color32::from_rgb(0, 255, 0),
        "blue" => egui::Color32::from_rgb(0, 0, 255),
        "yellow" => egui::Color32::from_rgb(255, 255, 0),
        "orange" => egui::Color32::from_rgb(255, 165, 0),
        "purple" => egui::Color32::from_rgb(128, 0, 128),
        "magenta" | "fuchsia" => egui::Color32::from_rgb(255, 0, 255),
        "cyan" | "aqua" => egui::Color32::from_rgb(0, 255, 255),
        "gray" | "grey" => egui::Color32::from_rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

fn line_color(color: Option<&str>) -> egui::Color32 {
    color.and_then(parse_color).unwrap_or(egui::Color32::BLACK)
}

fn to_screen(editor: &Editor, origin: egui::Pos2, model: Point) -> egui::Pos2 {
    origin + editor.transform().to_view(model).to_pos2().to_vec2()
}

pub(super) fn draw_image(
    painter: &egui::Painter,
    rect: egui::Rect,
    texture: &egui::TextureHandle,
) {
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
}

pub(super) fn draw_lines(
    painter: &egui::Painter,
    origin: egui::Pos2,
    editor: &Editor,
    settings: &AppSettings,
) {
    let font = egui::FontId::proportional(settings.label_font_size);
    for line in editor.store().iter() {
        let color = line_color(line.color.as_deref());
        let a = to_screen(editor, origin, line.start);
        let b = to_screen(editor, origin, line.end);
        painter.line_segment([a, b], egui::Stroke::new(settings.stroke_width, color));
        painter.text(
            a + LABEL_OFFSET,
            egui::Align2::LEFT_BOTTOM,
            line.label(),
            font.clone(),
            color,
        );
    }
}

pub(super) fn draw_pending(
    painter: &egui::Painter,
    origin: egui::Pos2,
    editor: &Editor,
    settings: &AppSettings,
) {
    let Some((start, end)) = editor.pending_line() else {
        return;
    };
    let a = to_screen(editor, origin, start);
    let b = to_screen(editor, origin, end);
    painter.line_segment([a, b], egui::Stroke::new(settings.stroke_width, PENDING_COLOR));
    let length = crate::editor::geometry::segment_length(start, end);
    painter.text(
        b + LABEL_OFFSET,
        egui::Align2::LEFT_BOTTOM,
        format!("{} px", length.round() as i64),
        egui::FontId::proportional(settings.label_font_size),
        PENDING_COLOR,
    );
}

/// Outline around the canvas while the eraser is active.
pub(super) fn draw_eraser_frame(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(2.0, ERASER_TINT),
        egui::StrokeKind::Inside,
    );
}

/// Side panel list of lines with editable name and color.
pub(super) fn line_list(ui: &mut egui::Ui, editor: &mut Editor) {
    if editor.store().is_empty() {
        ui.weak("No lines yet. Drag on the image to draw one.");
        return;
    }
    for line in editor.lines() {
        ui.push_id(line.id, |ui| {
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(swatch, 2.0, line_color(line.color.as_deref()));
                ui.strong(format!("#{}", line.id));
                ui.label(format!("{} px", line.length().round() as i64));
            });
            let mut name = line.name.clone().unwrap_or_default();
            ui.horizontal(|ui| {
                ui.label("Name:");
                let edit = ui.text_edit_singleline(&mut name);
                // Keep raw text while typing; blank names clear on commit.
                let result = if edit.lost_focus() {
                    editor.set_line_name(line.id, &name)
                } else if edit.changed() {
                    editor.edit_line_name(line.id, &name)
                } else {
                    Ok(())
                };
                if let Err(e) = result {
                    tracing::debug!("rename line {}: {e}", line.id);
                }
            });
            let mut color = line.color.clone().unwrap_or_default();
            ui.horizontal(|ui| {
                ui.label("Color:");
                let edit = ui.add(egui::TextEdit::singleline(&mut color).hint_text("black"));
                if edit.changed() {
                    if let Err(e) = editor.set_line_color(line.id, &color) {
                        tracing::debug!("recolor line {}: {e}", line.id);
                    }
                }
            });
            ui.separator();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#ff8000"), Some(egui::Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_color("#f80"), Some(egui::Color32::from_rgb(255, 136, 0)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(parse_color(" Red "), Some(egui::Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("grey"), parse_color("gray"));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn unknown_or_missing_color_falls_back_to_black() {
        assert_eq!(line_color(None), egui::Color32::BLACK);
        assert_eq!(line_color(Some("nope")), egui::Color32::BLACK);
        assert_eq!(line_color(Some("blue")), egui::Color32::from_rgb(0, 0, 255));
    }
}
