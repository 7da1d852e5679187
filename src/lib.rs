mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::cli::demo::CliDemoController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::visualizer::{
    DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SEQUENCE_LEN, FrameReport, VisualizerController,
};
pub use crate::core::actions::generate_sequence::{GenerateSequenceError, generate_sequence};
pub use crate::core::actions::render_frame::ports::surface::Surface;
pub use crate::core::actions::render_frame::render_frame::{
    BACKGROUND_COLOUR, BAR_COLOURS, render_frame,
};
pub use crate::core::data::bar_geometry::BarGeometry;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::highlight_map::HighlightMap;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_state::RenderState;
pub use crate::core::data::sequence::Sequence;
pub use crate::core::data::surface_size::SurfaceSize;
pub use crate::core::sorting::bubble::BubbleSortProcess;
pub use crate::core::sorting::direction::SortDirection;
pub use crate::core::sorting::factory::sorting_process_factory;
pub use crate::core::sorting::insertion::InsertionSortProcess;
pub use crate::core::sorting::kinds::SortKinds;
pub use crate::core::sorting::ports::sorting_process::SortingProcess;
pub use crate::core::sorting::step::{
    MOVED_FROM_COLOUR, MOVED_TO_COLOUR, ResumeError, StepOutcome,
};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
