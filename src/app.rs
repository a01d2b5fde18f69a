use egui::PointerButton;

use crate::canvas::PaintCanvas;
use crate::input::{InputEvent, InputHandler};
use crate::panels;

/// Top-level eframe application: the paint canvas plus the input translation
/// and panel wiring around it.
///
/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    canvas: PaintCanvas,
    // Per-frame input translation state; never persisted
    #[serde(skip)]
    input: InputHandler,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            canvas: PaintCanvas::new(),
            input: InputHandler::default(),
        }
    }
}

impl PaintApp {
    /// Called once before the first frame. Restores the previous session's
    /// canvas when the storage backend has one.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn canvas(&self) -> &PaintCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut PaintCanvas {
        &mut self.canvas
    }

    /// Translate this frame's raw input and feed it to the canvas,
    /// requesting a repaint when any event mutated it.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);

        let mut changed = false;
        for event in self.input.process_input(ctx) {
            changed |= self.route_event(&event);
        }
        if changed {
            ctx.request_repaint();
        }
    }

    /// Forward one pointer event to the canvas. Only primary-button presses
    /// inside the canvas start anything; moves and releases are forwarded
    /// unconditionally because the canvas ignores them while idle.
    fn route_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => self.canvas.pointer_down(location.position),
            InputEvent::PointerMove { location } => self.canvas.pointer_move(location.position),
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } => self.canvas.pointer_up(location.position),
            _ => false,
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
