//! UI module for the terminal wizard

pub mod render;
pub mod theme;
