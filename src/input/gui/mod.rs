//! GUI input adapter for the interactive visualizer.
//!
//! Provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the status overlay.

pub mod app;
pub mod command;
pub mod commands;
