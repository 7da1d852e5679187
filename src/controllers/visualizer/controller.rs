use crate::core::actions::generate_sequence::{GenerateSequenceError, generate_sequence};
use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::highlight_map::HighlightMap;
use crate::core::data::render_state::RenderState;
use crate::core::data::sequence::Sequence;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::factory::sorting_process_factory;
use crate::core::sorting::kinds::SortKinds;
use crate::core::sorting::ports::sorting_process::SortingProcess;
use crate::core::sorting::step::{ResumeError, StepOutcome};

pub const DEFAULT_SEQUENCE_LEN: usize = 50;
pub const DEFAULT_MIN_VALUE: u32 = 1;
pub const DEFAULT_MAX_VALUE: u32 = 100;

/// What a single frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameReport {
    /// No active process; the idle frame was rendered.
    Idle,
    /// The active process performed one swap; its highlight was rendered.
    Stepped,
    /// The active process finished; the slot was cleared and the sorted
    /// sequence rendered without highlights.
    Completed,
}

/// Owns the render state, the at-most-one active sorting process, and the
/// currently selected mode. The frame loop drives it through
/// [`advance_frame`](Self::advance_frame) once per frame; input handlers
/// call the command methods, which refuse mode changes while a process is
/// running.
pub struct VisualizerController {
    render_state: RenderState,
    active_process: Option<Box<dyn SortingProcess>>,
    sort_kind: SortKinds,
    direction: SortDirection,
    sequence_len: usize,
    min_value: u32,
    max_value: u32,
}

impl VisualizerController {
    pub fn new(size: SurfaceSize) -> Result<Self, GenerateSequenceError> {
        Self::with_limits(
            size,
            DEFAULT_SEQUENCE_LEN,
            DEFAULT_MIN_VALUE,
            DEFAULT_MAX_VALUE,
        )
    }

    pub fn with_limits(
        size: SurfaceSize,
        sequence_len: usize,
        min_value: u32,
        max_value: u32,
    ) -> Result<Self, GenerateSequenceError> {
        let sequence = generate_sequence(sequence_len, min_value, max_value)?;

        Ok(Self::with_sequence(size, sequence, min_value))
    }

    /// Builds a controller around a caller-supplied sequence instead of a
    /// random one. Reset regenerates with the same length and bounds.
    #[must_use]
    pub fn with_sequence(size: SurfaceSize, sequence: Sequence, min_value: u32) -> Self {
        let sequence_len = sequence.len();
        let max_value = sequence.max_value();

        Self {
            render_state: RenderState::new(size, sequence),
            active_process: None,
            sort_kind: SortKinds::default(),
            direction: SortDirection::default(),
            sequence_len,
            min_value,
            max_value,
        }
    }

    /// Always effective: discards any active process and installs a fresh
    /// random sequence.
    pub fn reset(&mut self) -> Result<(), GenerateSequenceError> {
        self.active_process = None;
        let sequence = generate_sequence(self.sequence_len, self.min_value, self.max_value)?;
        self.render_state.set_sequence(sequence);

        Ok(())
    }

    /// Installs a fresh process for the selected mode. Refused while a
    /// process is already active.
    pub fn start_sorting(&mut self) -> bool {
        if self.active_process.is_some() {
            return false;
        }

        self.active_process = Some(sorting_process_factory(self.sort_kind, self.direction));
        true
    }

    pub fn set_sort_kind(&mut self, kind: SortKinds) -> bool {
        if self.active_process.is_some() {
            return false;
        }

        self.sort_kind = kind;
        true
    }

    pub fn set_direction(&mut self, direction: SortDirection) -> bool {
        if self.active_process.is_some() {
            return false;
        }

        self.direction = direction;
        true
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.render_state.resize(size);
    }

    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.active_process.is_some()
    }

    #[must_use]
    pub fn sort_kind(&self) -> SortKinds {
        self.sort_kind
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    #[must_use]
    pub fn render_state(&self) -> &RenderState {
        &self.render_state
    }

    /// The once-per-frame entry point: resume the active process once and
    /// render its highlight, or render the idle frame. The strict
    /// resume-then-render alternation lives entirely inside this call,
    /// which is what keeps the unsynchronized sequence sharing safe.
    pub fn advance_frame<S: Surface>(&mut self, surface: &mut S) -> Result<FrameReport, ResumeError> {
        let Some(process) = self.active_process.as_mut() else {
            render_frame(&self.render_state, &HighlightMap::new(), true, surface);
            return Ok(FrameReport::Idle);
        };

        match process.resume(self.render_state.sequence_mut())? {
            StepOutcome::Suspended { highlight } => {
                render_frame(&self.render_state, &highlight, true, surface);
                Ok(FrameReport::Stepped)
            }
            StepOutcome::Completed => {
                self.active_process = None;
                render_frame(&self.render_state, &HighlightMap::new(), true, surface);
                Ok(FrameReport::Completed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::sorting::step::{MOVED_FROM_COLOUR, MOVED_TO_COLOUR};

    fn controller_with(values: &[u32]) -> (VisualizerController, PixelBuffer) {
        let size = SurfaceSize::new(100, 100);
        let controller =
            VisualizerController::with_sequence(size, Sequence::new(values.to_vec(), 100), 1);

        (controller, PixelBuffer::new(size))
    }

    #[test]
    fn test_new_generates_the_default_sequence() {
        let controller = VisualizerController::new(SurfaceSize::new(800, 600)).unwrap();

        assert_eq!(controller.render_state().sequence().len(), DEFAULT_SEQUENCE_LEN);
        assert!(!controller.is_sorting());
    }

    #[test]
    fn test_new_with_default_limits_is_valid() {
        assert!(VisualizerController::new(SurfaceSize::new(0, 0)).is_ok());
    }

    #[test]
    fn test_with_limits_rejects_inverted_bounds() {
        let result = VisualizerController::with_limits(SurfaceSize::new(100, 100), 10, 50, 10);

        assert!(result.is_err());
    }

    #[test]
    fn test_start_sorting_is_refused_while_active() {
        let (mut controller, _) = controller_with(&[3, 1, 2]);

        assert!(controller.start_sorting());
        assert!(controller.is_sorting());
        assert!(!controller.start_sorting());
    }

    #[test]
    fn test_mode_changes_are_refused_while_active() {
        let (mut controller, _) = controller_with(&[3, 1, 2]);
        controller.start_sorting();

        assert!(!controller.set_sort_kind(SortKinds::Insertion));
        assert!(!controller.set_direction(SortDirection::Descending));
        assert_eq!(controller.sort_kind(), SortKinds::Bubble);
        assert_eq!(controller.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_mode_changes_apply_while_idle() {
        let (mut controller, _) = controller_with(&[3, 1, 2]);

        assert!(controller.set_sort_kind(SortKinds::Insertion));
        assert!(controller.set_direction(SortDirection::Descending));
        assert_eq!(controller.sort_kind(), SortKinds::Insertion);
        assert_eq!(controller.direction(), SortDirection::Descending);
    }

    #[test]
    fn test_idle_frame_reports_idle() {
        let (mut controller, mut frame) = controller_with(&[3, 1, 2]);

        assert_eq!(
            controller.advance_frame(&mut frame).unwrap(),
            FrameReport::Idle
        );
    }

    #[test]
    fn test_first_step_of_known_scenario() {
        let (mut controller, mut frame) = controller_with(&[5, 3, 4, 1, 2]);
        controller.start_sorting();

        let report = controller.advance_frame(&mut frame).unwrap();

        assert_eq!(report, FrameReport::Stepped);
        assert_eq!(
            controller.render_state().sequence().values(),
            &[3, 5, 4, 1, 2]
        );

        // 5 bars of width 20 on a 100x100 surface; the bottom row shows
        // every bar. Swapped indices carry the step highlight, the rest
        // their base colours.
        assert_eq!(frame.pixel_at(0, 99), Some(MOVED_TO_COLOUR));
        assert_eq!(frame.pixel_at(20, 99), Some(MOVED_FROM_COLOUR));
        assert_eq!(frame.pixel_at(40, 99), Some(Colour::GREY));
        assert_eq!(frame.pixel_at(60, 99), Some(Colour::SILVER));
    }

    #[test]
    fn test_run_to_completion_then_idle() {
        let (mut controller, mut frame) = controller_with(&[5, 3, 4, 1, 2]);
        controller.start_sorting();

        let mut steps = 0;
        loop {
            match controller.advance_frame(&mut frame).unwrap() {
                FrameReport::Stepped => steps += 1,
                FrameReport::Completed => break,
                FrameReport::Idle => panic!("went idle before completing"),
            }
        }

        assert!(steps <= 10);
        assert_eq!(
            controller.render_state().sequence().values(),
            &[1, 2, 3, 4, 5]
        );
        assert!(!controller.is_sorting());
        assert_eq!(
            controller.advance_frame(&mut frame).unwrap(),
            FrameReport::Idle
        );
    }

    #[test]
    fn test_sorted_input_completes_on_the_first_frame() {
        let (mut controller, mut frame) = controller_with(&[1, 2, 3]);
        controller.start_sorting();

        assert_eq!(
            controller.advance_frame(&mut frame).unwrap(),
            FrameReport::Completed
        );
        assert!(!controller.is_sorting());
    }

    #[test]
    fn test_completion_renders_without_highlights() {
        let (mut controller, mut frame) = controller_with(&[2, 1]);
        controller.start_sorting();

        while controller.advance_frame(&mut frame).unwrap() != FrameReport::Completed {}

        let mut idle_frame = PixelBuffer::new(SurfaceSize::new(100, 100));
        controller.advance_frame(&mut idle_frame).unwrap();

        assert_eq!(frame.buffer(), idle_frame.buffer());
    }

    #[test]
    fn test_reset_cancels_the_active_process() {
        let (mut controller, mut frame) = controller_with(&[5, 3, 4, 1, 2]);
        controller.start_sorting();
        controller.advance_frame(&mut frame).unwrap();

        controller.reset().unwrap();

        assert!(!controller.is_sorting());
        assert_eq!(controller.render_state().sequence().len(), 5);
        assert!(controller.start_sorting());
    }

    #[test]
    fn test_resize_keeps_the_sequence_and_updates_geometry() {
        let (mut controller, _) = controller_with(&[5, 3, 4, 1, 2]);
        let before = controller.render_state().sequence().clone();

        controller.resize(SurfaceSize::new(50, 200));

        assert_eq!(controller.render_state().sequence(), &before);
        assert_eq!(controller.render_state().geometry().bar_width(), 10);
        assert_eq!(controller.render_state().geometry().bar_height(), 180);
    }

    #[test]
    fn test_idle_frames_are_idempotent() {
        let (mut controller, _) = controller_with(&[20, 80, 40]);
        let mut first = PixelBuffer::new(SurfaceSize::new(100, 100));
        let mut second = PixelBuffer::new(SurfaceSize::new(100, 100));

        controller.advance_frame(&mut first).unwrap();
        controller.advance_frame(&mut second).unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_direction_applies_to_the_next_run() {
        let (mut controller, mut frame) = controller_with(&[1, 3, 2]);
        controller.set_direction(SortDirection::Descending);
        controller.start_sorting();

        while controller.advance_frame(&mut frame).unwrap() != FrameReport::Completed {}

        assert_eq!(controller.render_state().sequence().values(), &[3, 2, 1]);
    }

    #[test]
    fn test_insertion_kind_applies_to_the_next_run() {
        let (mut controller, mut frame) = controller_with(&[4, 1, 3, 2]);
        controller.set_sort_kind(SortKinds::Insertion);
        controller.start_sorting();

        while controller.advance_frame(&mut frame).unwrap() != FrameReport::Completed {}

        assert_eq!(controller.render_state().sequence().values(), &[1, 2, 3, 4]);
    }
}
