// src/core/mod.rs

pub mod html;
pub mod render;
pub mod sanitize;

pub use render::{Render, RenderError};
