//! Rendering: the canvas, the paint pass, and the terminal driver.

pub mod canvas;
pub mod driver;
pub mod renderer;

pub use canvas::{Canvas, Cell, RegionId};
pub use driver::{Driver, TermEvent};
pub use renderer::Renderer;
