//! UI module for the egui-based interface.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use screens::Screen;
