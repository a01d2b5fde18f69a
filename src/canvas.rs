use egui::{Color32, Pos2};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::shape::{factory, FreehandLine, Shape, ShapeType};
use crate::surface::DrawSurface;

/// Canvas background color. The eraser paints with this, so erased pixels
/// are indistinguishable from blank canvas.
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

/// Color the eraser draws with; must match the background.
pub const ERASER_COLOR: Color32 = BACKGROUND_COLOR;

pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_STAMP_SIZE: f32 = 50.0;

/// Active drawing mode. Exactly one mode is active at any time; every
/// mode-setting operation replaces the previous mode wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    /// Freehand stroke in the current color.
    Brush,
    /// Freehand stroke in the background color.
    Eraser,
    /// Freehand stroke that re-rolls its color on every pointer move.
    Rainbow,
    /// One fixed-size circle per click.
    CircleStamp,
    /// One fixed-size square per click.
    SquareStamp,
}

fn entropy_rng() -> Box<dyn RngCore + Send> {
    Box::new(StdRng::from_entropy())
}

/// Owns the committed document, the at-most-one in-progress line, and the
/// current tool state.
///
/// Pointer handlers return `true` when they mutated the canvas so the shell
/// knows to request a repaint. Every operation is total: there are no error
/// paths in this layer.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct PaintCanvas {
    document: Document,
    // Transient gesture state; never persisted.
    #[serde(skip)]
    live_line: Option<FreehandLine>,
    mode: ToolMode,
    color: Color32,
    stroke_width: f32,
    stamp_size: f32,
    // Randomness source for rainbow strokes; injectable for tests.
    #[serde(skip, default = "entropy_rng")]
    rng: Box<dyn RngCore + Send>,
}

// Custom Debug implementation since the rng handle doesn't implement Debug
impl std::fmt::Debug for PaintCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintCanvas")
            .field("document", &self.document)
            .field("live_line", &self.live_line)
            .field("mode", &self.mode)
            .field("color", &self.color)
            .field("stroke_width", &self.stroke_width)
            .field("stamp_size", &self.stamp_size)
            .finish()
    }
}

impl Default for PaintCanvas {
    fn default() -> Self {
        Self {
            document: Document::new(),
            live_line: None,
            mode: ToolMode::Brush,
            color: Color32::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stamp_size: DEFAULT_STAMP_SIZE,
            rng: entropy_rng(),
        }
    }
}

impl PaintCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas with an injected randomness source, so tests can drive
    /// rainbow strokes deterministically.
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            rng,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The in-progress line, if a freehand gesture is active.
    pub fn live_line(&self) -> Option<&FreehandLine> {
        self.live_line.as_ref()
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn stamp_size(&self) -> f32 {
        self.stamp_size
    }

    pub fn set_stamp_size(&mut self, size: f32) {
        self.stamp_size = size;
    }

    /// Pick a paint color. Also drops back to the plain brush: picking a
    /// specific color leaves any eraser, rainbow or stamp mode.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.mode = ToolMode::Brush;
    }

    pub fn enable_brush(&mut self) {
        self.mode = ToolMode::Brush;
    }

    pub fn enable_rainbow(&mut self) {
        self.mode = ToolMode::Rainbow;
    }

    pub fn enable_eraser(&mut self) {
        self.mode = ToolMode::Eraser;
    }

    pub fn enable_circle_stamp(&mut self) {
        self.mode = ToolMode::CircleStamp;
    }

    pub fn enable_square_stamp(&mut self) {
        self.mode = ToolMode::SquareStamp;
    }

    /// Pointer pressed at `pos`. Stamp modes commit a shape immediately and
    /// never open a gesture; freehand modes open the live line with its
    /// initial point.
    pub fn pointer_down(&mut self, pos: Pos2) -> bool {
        match self.mode {
            ToolMode::CircleStamp => {
                self.document
                    .add_shape(factory::create_circle(pos, self.stamp_size, self.color));
                debug!("stamped circle at {pos:?}");
                true
            }
            ToolMode::SquareStamp => {
                self.document
                    .add_shape(factory::create_square(pos, self.stamp_size, self.color));
                debug!("stamped square at {pos:?}");
                true
            }
            ToolMode::Brush | ToolMode::Eraser | ToolMode::Rainbow => {
                let mut line = match self.mode {
                    ToolMode::Eraser => {
                        FreehandLine::new(ERASER_COLOR, self.stroke_width, false)
                    }
                    ToolMode::Rainbow => FreehandLine::new(self.color, self.stroke_width, true),
                    _ => FreehandLine::new(self.color, self.stroke_width, false),
                };
                line.push_point(pos);
                self.live_line = Some(line);
                true
            }
        }
    }

    /// Extend the live line with the current pointer position, re-rolling
    /// the rainbow color first. Ignored while no gesture is active.
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let Some(line) = self.live_line.as_mut() else {
            return false;
        };
        line.advance_rainbow_color(self.rng.as_mut());
        line.push_point(pos);
        true
    }

    /// Append the release position and commit the live line into the
    /// document. Ignored while no gesture is active.
    pub fn pointer_up(&mut self, pos: Pos2) -> bool {
        let Some(mut line) = self.live_line.take() else {
            return false;
        };
        line.push_point(pos);
        debug!("committed freehand line with {} points", line.points().len());
        self.document.add_shape(ShapeType::Freehand(line));
        true
    }

    /// Draw every committed shape in insertion order, then the live line
    /// (if any) on top.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for shape in self.document.shapes() {
            shape.draw(surface);
        }
        if let Some(line) = &self.live_line {
            line.draw(surface);
        }
    }
}
