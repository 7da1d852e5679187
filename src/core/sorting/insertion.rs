use crate::core::data::highlight_map::HighlightMap;
use crate::core::data::sequence::Sequence;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::ports::sorting_process::SortingProcess;
use crate::core::sorting::step::{
    MOVED_FROM_COLOUR, MOVED_TO_COLOUR, ResumeError, StepOutcome,
};

/// Insertion sort as an explicit state machine.
///
/// `outer` is the index of the element currently being inserted; `cursor`
/// walks it down through the sorted prefix. Because the in-flight value is
/// written back into the sequence after every shift, a shift is exactly an
/// adjacent swap of `(cursor - 1, cursor)` and the sequence itself carries
/// the in-flight value between resumes; no held-aside copy is needed.
///
/// Highlight after a shift, with `cursor` already decremented: `cursor` is
/// moved-from (red, the slot the inserted value just landed in) and
/// `cursor - 1` moved-to (green) when it exists. The colour roles differ
/// from bubble sort's on purpose; each algorithm keeps its own literal
/// colouring.
#[derive(Debug)]
pub struct InsertionSortProcess {
    direction: SortDirection,
    outer: usize,
    cursor: usize,
    completed: bool,
}

impl InsertionSortProcess {
    #[must_use]
    pub fn new(direction: SortDirection) -> Self {
        Self {
            direction,
            outer: 1,
            cursor: 1,
            completed: false,
        }
    }
}

impl SortingProcess for InsertionSortProcess {
    fn resume(&mut self, sequence: &mut Sequence) -> Result<StepOutcome, ResumeError> {
        if self.completed {
            return Err(ResumeError::AlreadyCompleted);
        }

        let len = sequence.len();

        loop {
            if self.outer >= len {
                self.completed = true;
                return Ok(StepOutcome::Completed);
            }

            let k = self.cursor;

            if k > 0
                && self
                    .direction
                    .out_of_order(sequence.value(k - 1), sequence.value(k))
            {
                sequence.swap(k - 1, k);
                self.cursor = k - 1;

                let mut highlight = HighlightMap::new();
                highlight.insert(k - 1, MOVED_FROM_COLOUR);
                if k >= 2 {
                    highlight.insert(k - 2, MOVED_TO_COLOUR);
                }

                return Ok(StepOutcome::Suspended { highlight });
            }

            self.outer += 1;
            self.cursor = self.outer;
        }
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}
