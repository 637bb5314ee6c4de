use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .resizable(true)
        .default_width(460.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Keyboard Shortcuts");
                ui.separator();
                help_row(ui, "⌘O", "Open image");
                help_row(ui, "⌘S", "Export annotations (JSON)");
                help_row(ui, "E", "Toggle eraser");
                help_row(ui, "+ / -", "Zoom in / out");
                help_row(ui, "0", "Reset zoom");
                help_row(ui, "Escape", "Cancel the current gesture");
                help_row(ui, "F1", "Show this help");

                ui.add_space(10.0);
                ui.heading("Mouse");
                ui.separator();
                help_row(ui, "Drag", "Draw a new line");
                help_row(ui, "Drag endpoint", "Resize a line");
                help_row(ui, "Drag line", "Move a line");
                help_row(ui, "Click (eraser)", "Remove lines under the pointer");
                ui.separator();
                ui.label("• Lengths are measured in image pixels at any zoom");
                ui.label("• Ids are renumbered after lines are erased");
                ui.label("• Name and color lines in the right panel");
            });
        });
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [110.0, 16.0],
            egui::Label::new(egui::RichText::new(shortcut).monospace().strong()),
        );
        ui.label(description);
    });
}
