use eframe::egui;

use crate::editor::{Editor, Gesture};
use crate::error::EditorError;
use crate::model;

use super::AnnotatorApp;
use super::help::draw_help_window;
use super::render::{draw_eraser_frame, draw_image, draw_lines, draw_pending, line_list};

#[derive(Default)]
struct Shortcuts {
    open: bool,
    export: bool,
    eraser: bool,
    zoom_in: bool,
    zoom_out: bool,
    zoom_reset: bool,
    cancel: bool,
    help: bool,
}

impl AnnotatorApp {
    fn handle_pointer_result(
        &mut self,
        ctx: &egui::Context,
        context: &str,
        result: Result<bool, EditorError>,
    ) {
        match result {
            Ok(true) => ctx.request_repaint(),
            Ok(false) => {}
            Err(e) => self.report(context, e),
        }
    }

    fn zoom(&mut self, f: impl FnOnce(&mut Editor) -> Result<(), EditorError>) {
        if let Err(e) = f(&mut self.editor) {
            self.report("Zoom", e);
        }
    }

    fn read_shortcuts(ctx: &egui::Context) -> Shortcuts {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            let mut s = Shortcuts {
                open: i.consume_key(egui::Modifiers::COMMAND, egui::Key::O),
                export: i.consume_key(egui::Modifiers::COMMAND, egui::Key::S),
                help: i.consume_key(egui::Modifiers::NONE, egui::Key::F1),
                cancel: i.consume_key(egui::Modifiers::NONE, egui::Key::Escape),
                ..Default::default()
            };
            if !wants_keyboard {
                s.eraser = i.consume_key(egui::Modifiers::NONE, egui::Key::E);
                s.zoom_in = i.consume_key(egui::Modifiers::NONE, egui::Key::Plus)
                    || i.consume_key(egui::Modifiers::NONE, egui::Key::Equals)
                    || i.consume_key(egui::Modifiers::SHIFT, egui::Key::Equals);
                s.zoom_out = i.consume_key(egui::Modifiers::NONE, egui::Key::Minus);
                s.zoom_reset = i.consume_key(egui::Modifiers::NONE, egui::Key::Num0);
            }
            s
        })
    }

    fn apply_shortcuts(&mut self, ctx: &egui::Context, s: Shortcuts) {
        if s.open {
            self.open_image_dialog(ctx);
        }
        if s.export {
            self.export_dialog();
        }
        if s.help {
            self.show_help = true;
        }
        if s.cancel && self.editor.cancel() {
            ctx.request_repaint();
        }
        if s.eraser {
            self.toggle_eraser();
        }
        if s.zoom_in {
            self.zoom(|e| e.zoom_in());
        }
        if s.zoom_out {
            self.zoom(|e| e.zoom_out());
        }
        if s.zoom_reset {
            self.zoom(|e| e.reset_zoom());
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Open image… (⌘O)").clicked() {
                self.open_image_dialog(ui.ctx());
            }
            let has_image = self.image.is_some();
            if ui
                .add_enabled(has_image, egui::Button::new("Export JSON… (⌘S)"))
                .clicked()
            {
                self.export_dialog();
            }
            if ui
                .add_enabled(has_image, egui::Button::new("Quick export"))
                .on_hover_text(&self.settings.export_path)
                .clicked()
            {
                self.quick_export();
            }
            ui.separator();

            let eraser_label = if self.editor.is_erasing() {
                "Disable eraser (E)"
            } else {
                "Enable eraser (E)"
            };
            if ui
                .add_enabled(
                    has_image,
                    egui::Button::new(eraser_label).selected(self.editor.is_erasing()),
                )
                .clicked()
            {
                self.toggle_eraser();
            }
            ui.separator();

            if ui.button("Zoom in").clicked() {
                self.zoom(|e| e.zoom_in());
            }
            if ui.button("Zoom out").clicked() {
                self.zoom(|e| e.zoom_out());
            }
            if ui.button("100%").clicked() {
                self.zoom(|e| e.reset_zoom());
            }
            ui.separator();

            let adj = self.editor.adjustments();
            ui.label(format!("Brightness {:.1}", adj.brightness));
            if ui.small_button("−").clicked() {
                self.adjust(|a| a.decrease_brightness());
            }
            if ui.small_button("+").clicked() {
                self.adjust(|a| a.increase_brightness());
            }
            ui.label(format!("Contrast {:.1}", adj.contrast));
            if ui.small_button("−").clicked() {
                self.adjust(|a| a.decrease_contrast());
            }
            if ui.small_button("+").clicked() {
                self.adjust(|a| a.increase_contrast());
            }
            if ui.small_button("Reset").clicked() {
                self.adjust(|a| a.reset());
            }
            ui.separator();

            if ui.button("Reload settings").clicked() {
                self.reload_settings();
            }
            if ui.button("Help (F1)").clicked() {
                self.show_help = true;
            }
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(status) = &self.status {
                ui.label(status);
            } else {
                ui.label("Ready");
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Zoom: {:.0}%",
                    self.editor.transform().zoom_scale() * 100.0
                ));
                ui.separator();
                ui.label(format!("Lines: {}", self.editor.store().len()));
                ui.separator();
                let mode = if self.editor.is_erasing() {
                    "Eraser"
                } else {
                    match self.editor.gesture() {
                        Gesture::Idle => "Draw",
                        Gesture::Drawing { .. } => "Drawing",
                        Gesture::Dragging { .. } => "Moving",
                        Gesture::Resizing { .. } => "Resizing",
                    }
                };
                ui.label(format!("Mode: {mode}"));
                if let Some(name) = self.image_name() {
                    ui.separator();
                    ui.label(name);
                }
            });
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let Some(info) = self.editor.image() else {
            ui.centered_and_justified(|ui| {
                if ui.button("Open an image to start annotating").clicked() {
                    self.open_image_dialog(ui.ctx());
                }
            });
            return;
        };
        let ctx = ui.ctx().clone();
        let zoom = self.editor.transform().zoom_scale();
        let size = egui::vec2(info.width as f32 * zoom, info.height as f32 * zoom);

        egui::ScrollArea::both().show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let origin = rect.min;
            let to_view = |p: egui::Pos2| model::Point::from_pos2((p - origin).to_pos2());

            let zoom_delta = ctx.input(|i| i.zoom_delta());
            if response.hovered() && zoom_delta != 1.0 {
                self.zoom(|e| e.set_zoom(zoom * zoom_delta));
            }

            let primary = egui::PointerButton::Primary;
            if response.drag_started_by(primary) {
                if let Some(press) = ctx.input(|i| i.pointer.press_origin()) {
                    let result = self.editor.pointer_down(to_view(press));
                    self.handle_pointer_result(&ctx, "Pointer down", result);
                }
            }
            if response.dragged_by(primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    let result = self.editor.pointer_move(to_view(pos));
                    self.handle_pointer_result(&ctx, "Pointer move", result);
                }
            }
            if response.drag_stopped_by(primary) {
                let pos = response
                    .interact_pointer_pos()
                    .or_else(|| ctx.input(|i| i.pointer.latest_pos()));
                match pos {
                    Some(pos) => {
                        let result = self.editor.pointer_up(to_view(pos));
                        self.handle_pointer_result(&ctx, "Pointer up", result);
                    }
                    None => {
                        self.editor.cancel();
                    }
                }
            } else if !response.dragged() && !self.editor.gesture().is_idle() {
                // Pointer capture was lost without a release.
                if self.editor.cancel() {
                    ctx.request_repaint();
                }
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let result = self.editor.click(to_view(pos));
                    self.handle_pointer_result(&ctx, "Erase", result);
                }
            }

            let painter = ui.painter_at(rect);
            if let Some(loaded) = &self.image {
                draw_image(&painter, rect, &loaded.texture);
            }
            draw_lines(&painter, origin, &self.editor, &self.settings);
            draw_pending(&painter, origin, &self.editor, &self.settings);
            if self.editor.is_erasing() {
                draw_eraser_frame(&painter, rect);
                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::NotAllowed);
                }
            } else if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let shortcuts = Self::read_shortcuts(ctx);
        self.apply_shortcuts(ctx, shortcuts);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::SidePanel::right("lines_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Lines");
                ui.small(format!("Hit tolerance: {} px", self.editor.tolerance()));
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    line_list(ui, &mut self.editor);
                });
            });

        self.refresh_texture();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });

        draw_help_window(ctx, &mut self.show_help);
    }
}
