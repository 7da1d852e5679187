//! Application layer for the interactive visualizer.
//!
//! [`VisualizerController`] is the explicitly-owned application state the
//! event handlers and the frame loop share: the selected algorithm and
//! direction, the render state, and the slot holding the at-most-one
//! active sorting process.

mod controller;

pub use controller::{
    DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SEQUENCE_LEN, FrameReport, VisualizerController,
};
