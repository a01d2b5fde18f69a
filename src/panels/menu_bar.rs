use egui::Color32;

use crate::PaintApp;

/// Menu bar with the preset color menu and the novelty drawing modes.
pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Colors", |ui| {
                if ui.button("Red").clicked() {
                    app.canvas_mut().set_color(Color32::RED);
                    ui.close_menu();
                }
                if ui.button("Green").clicked() {
                    app.canvas_mut().set_color(Color32::GREEN);
                    ui.close_menu();
                }
                if ui.button("Blue").clicked() {
                    app.canvas_mut().set_color(Color32::BLUE);
                    ui.close_menu();
                }
            });

            ui.menu_button("Fun Modes", |ui| {
                if ui.button("Rainbow Brush").clicked() {
                    app.canvas_mut().enable_rainbow();
                    ui.close_menu();
                }
                if ui.button("Eraser").clicked() {
                    app.canvas_mut().enable_eraser();
                    ui.close_menu();
                }
                if ui.button("Draw Circle").clicked() {
                    app.canvas_mut().enable_circle_stamp();
                    ui.close_menu();
                }
                if ui.button("Draw Square").clicked() {
                    app.canvas_mut().enable_square_stamp();
                    ui.close_menu();
                }
            });
        });
    });
}
