//! The window tree: node types and the arena that owns them.

pub mod arena;
pub mod node;

pub use arena::Arena;
pub use node::{
    Align, Axis, Border, BorderConfig, Kind, MenuId, Parent, ParentConfig, Pos, Text, TextConfig,
    Window, WindowId,
};
