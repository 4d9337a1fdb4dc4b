//! Shapeboard engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the drawing board sits on:
//! geometry and color types, a renderer-agnostic draw list, the wgpu mesh
//! renderer, the winit window loop and platform-agnostic input.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
