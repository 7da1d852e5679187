use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::visualizer::{FrameReport, VisualizerController};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::kinds::SortKinds;
use std::path::Path;
use std::time::Instant;

/// Headless demo: runs one sorting process to completion frame by frame
/// and keeps the final rendered frame for the presenter to write out.
pub struct CliDemoController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliDemoController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn run(
        &mut self,
        kind: SortKinds,
        direction: SortDirection,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let width: u32 = 800;
        let height: u32 = 600;
        let size = SurfaceSize::new(width, height);

        let mut controller = VisualizerController::new(size)?;
        controller.set_sort_kind(kind);
        controller.set_direction(direction);
        controller.start_sorting();

        println!("Sorting {} values...", controller.render_state().sequence().len());
        println!("Algorithm:  {}", kind.display_name());
        println!("Direction:  {}", direction.display_name());
        println!("Frame size: {}x{}", width, height);

        let mut frame = PixelBuffer::new(size);
        let start = Instant::now();
        let mut steps: u64 = 0;

        loop {
            match controller.advance_frame(&mut frame)? {
                FrameReport::Stepped => steps += 1,
                FrameReport::Completed | FrameReport::Idle => break,
            }
        }

        let duration = start.elapsed();

        println!("Steps:      {}", steps);
        println!("Duration:   {:?}", duration);

        self.frame = Some(frame);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, filepath)?
        }

        Ok(())
    }
}
