use egui::Slider;

use crate::canvas::ToolMode;
use crate::PaintApp;

const MODES: [(ToolMode, &str); 5] = [
    (ToolMode::Brush, "🖌 Brush"),
    (ToolMode::Eraser, "⌫ Eraser"),
    (ToolMode::Rainbow, "Rainbow brush"),
    (ToolMode::CircleStamp, "○ Circle stamp"),
    (ToolMode::SquareStamp, "◻ Square stamp"),
];

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Create selectable buttons for each mode
            let active = app.canvas().mode();
            for (mode, label) in MODES {
                if ui.selectable_label(active == mode, label).clicked() && active != mode {
                    log::info!("tool selected from UI: {mode:?}");
                    match mode {
                        ToolMode::Brush => app.canvas_mut().enable_brush(),
                        ToolMode::Eraser => app.canvas_mut().enable_eraser(),
                        ToolMode::Rainbow => app.canvas_mut().enable_rainbow(),
                        ToolMode::CircleStamp => app.canvas_mut().enable_circle_stamp(),
                        ToolMode::SquareStamp => app.canvas_mut().enable_square_stamp(),
                    }
                }
            }

            ui.separator();

            // Color picker; picking a color also drops back to the brush
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.canvas().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.canvas_mut().set_color(color);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Stroke width:");
                let mut width = app.canvas().stroke_width();
                if ui.add(Slider::new(&mut width, 1.0..=20.0)).changed() {
                    app.canvas_mut().set_stroke_width(width);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Stamp size:");
                let mut size = app.canvas().stamp_size();
                if ui.add(Slider::new(&mut size, 10.0..=200.0)).changed() {
                    app.canvas_mut().set_stamp_size(size);
                }
            });

            ui.separator();
            ui.label(format!("Shapes: {}", app.canvas().document().len()));
        });
}
