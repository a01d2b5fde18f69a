#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod document;
pub mod input;
pub mod panels;
pub mod shape;
pub mod surface;

pub use app::PaintApp;
pub use canvas::{PaintCanvas, ToolMode};
pub use document::Document;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use shape::{Shape, ShapeType};
pub use surface::{DrawSurface, PainterSurface};
