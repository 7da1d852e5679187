use crate::core::data::sequence::Sequence;
use crate::core::sorting::step::{ResumeError, StepOutcome};

/// A sorting algorithm converted into an externally-steppable process.
///
/// `resume` advances the algorithm until it either performs exactly one
/// swap (suspending with the highlight map for that swap) or exhausts its
/// work (completing). Comparisons that require no swap never suspend; the
/// process runs past them within the same call. The `&mut Sequence` borrow
/// is the whole sharing discipline: the process mutates the sequence only
/// inside `resume`, and the renderer reads it only between resumes.
pub trait SortingProcess {
    fn resume(&mut self, sequence: &mut Sequence) -> Result<StepOutcome, ResumeError>;

    fn is_completed(&self) -> bool;
}
