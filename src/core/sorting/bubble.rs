use crate::core::data::highlight_map::HighlightMap;
use crate::core::data::sequence::Sequence;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::ports::sorting_process::SortingProcess;
use crate::core::sorting::step::{
    MOVED_FROM_COLOUR, MOVED_TO_COLOUR, ResumeError, StepOutcome,
};

/// Adjacent-pair bubble sort as an explicit state machine.
///
/// The loop cursors the generator formulation keeps in its suspended
/// frame live here as plain fields: `outer` counts completed passes,
/// `inner` is the pair index within the current pass. Each resume runs
/// until a pair is out of order, swaps it, and suspends; pairs already in
/// order are passed over inside the same call.
///
/// After a swap of `(j, j + 1)` the highlight marks `j` moved-to (green)
/// and `j + 1` moved-from (red).
#[derive(Debug)]
pub struct BubbleSortProcess {
    direction: SortDirection,
    outer: usize,
    inner: usize,
    completed: bool,
}

impl BubbleSortProcess {
    #[must_use]
    pub fn new(direction: SortDirection) -> Self {
        Self {
            direction,
            outer: 0,
            inner: 0,
            completed: false,
        }
    }
}

impl SortingProcess for BubbleSortProcess {
    fn resume(&mut self, sequence: &mut Sequence) -> Result<StepOutcome, ResumeError> {
        if self.completed {
            return Err(ResumeError::AlreadyCompleted);
        }

        let len = sequence.len();

        loop {
            if len < 2 || self.outer >= len - 1 {
                self.completed = true;
                return Ok(StepOutcome::Completed);
            }

            if self.inner >= len - 1 - self.outer {
                self.outer += 1;
                self.inner = 0;
                continue;
            }

            let j = self.inner;
            self.inner += 1;

            if self
                .direction
                .out_of_order(sequence.value(j), sequence.value(j + 1))
            {
                sequence.swap(j, j + 1);

                let mut highlight = HighlightMap::new();
                highlight.insert(j, MOVED_TO_COLOUR);
                highlight.insert(j + 1, MOVED_FROM_COLOUR);

                return Ok(StepOutcome::Suspended { highlight });
            }
        }
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(values: &[u32]) -> Sequence {
        Sequence::new(values.to_vec(), 100)
    }

    /// Resumes until completion, returning the number of suspending steps.
    /// Panics if the step-count bound for the length is exceeded.
    fn run_to_completion(process: &mut BubbleSortProcess, sequence: &mut Sequence) -> usize {
        let len = sequence.len();
        let bound = len * len.saturating_sub(1) / 2;
        let mut steps = 0;

        loop {
            match process.resume(sequence).expect("process not completed yet") {
                StepOutcome::Suspended { .. } => {
                    steps += 1;
                    assert!(steps <= bound, "exceeded {} suspending steps", bound);
                }
                StepOutcome::Completed => return steps,
            }
        }
    }

    #[test]
    fn test_first_step_swaps_first_out_of_order_pair() {
        let mut sequence = sequence_of(&[5, 3, 4, 1, 2]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        let outcome = process.resume(&mut sequence).unwrap();

        assert_eq!(sequence.values(), &[3, 5, 4, 1, 2]);
        let StepOutcome::Suspended { highlight } = outcome else {
            panic!("expected a suspending step");
        };
        assert_eq!(highlight.colour_for(0), Some(MOVED_TO_COLOUR));
        assert_eq!(highlight.colour_for(1), Some(MOVED_FROM_COLOUR));
        assert_eq!(highlight.len(), 2);
    }

    #[test]
    fn test_runs_to_sorted_ascending() {
        let mut sequence = sequence_of(&[5, 3, 4, 1, 2]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        run_to_completion(&mut process, &mut sequence);

        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5]);
        assert!(process.is_completed());
    }

    #[test]
    fn test_runs_to_sorted_descending() {
        let mut sequence = sequence_of(&[5, 3, 4, 1, 2]);
        let mut process = BubbleSortProcess::new(SortDirection::Descending);

        run_to_completion(&mut process, &mut sequence);

        assert_eq!(sequence.values(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sorted_input_completes_with_zero_steps() {
        let mut sequence = sequence_of(&[1, 2, 3, 4, 5]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        let steps = run_to_completion(&mut process, &mut sequence);

        assert_eq!(steps, 0);
        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_equal_values_never_suspend() {
        let mut sequence = sequence_of(&[7, 7, 7, 7]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        let steps = run_to_completion(&mut process, &mut sequence);

        assert_eq!(steps, 0);
    }

    #[test]
    fn test_reverse_input_hits_the_step_bound() {
        let mut sequence = sequence_of(&[5, 4, 3, 2, 1]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        let steps = run_to_completion(&mut process, &mut sequence);

        // Every pair is an inversion: exactly L * (L - 1) / 2 swaps.
        assert_eq!(steps, 10);
        assert_eq!(sequence.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_sequence_completes_immediately() {
        let mut sequence = sequence_of(&[]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        assert_eq!(
            process.resume(&mut sequence).unwrap(),
            StepOutcome::Completed
        );
    }

    #[test]
    fn test_single_element_completes_immediately() {
        let mut sequence = sequence_of(&[42]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        assert_eq!(
            process.resume(&mut sequence).unwrap(),
            StepOutcome::Completed
        );
        assert_eq!(sequence.values(), &[42]);
    }

    #[test]
    fn test_resume_after_completion_fails_fast() {
        let mut sequence = sequence_of(&[2, 1]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        run_to_completion(&mut process, &mut sequence);

        assert_eq!(
            process.resume(&mut sequence),
            Err(ResumeError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_completion_preserves_the_value_multiset() {
        let mut sequence = crate::core::actions::generate_sequence::generate_sequence(40, 1, 10)
            .expect("bounds are valid");
        let mut before = sequence.values().to_vec();
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        run_to_completion(&mut process, &mut sequence);

        before.sort_unstable();
        assert_eq!(sequence.values(), &before[..]);
        assert!(SortDirection::Ascending.is_sorted(sequence.values()));
    }

    #[test]
    fn test_each_suspend_performs_exactly_one_swap() {
        let mut sequence = sequence_of(&[3, 1, 2]);
        let mut process = BubbleSortProcess::new(SortDirection::Ascending);

        let mut previous = sequence.values().to_vec();
        while let StepOutcome::Suspended { .. } = process.resume(&mut sequence).unwrap() {
            let current = sequence.values().to_vec();
            let differing = previous
                .iter()
                .zip(current.iter())
                .filter(|(a, b)| a != b)
                .count();

            assert_eq!(differing, 2, "a single adjacent swap changes two slots");
            previous = current;
        }
    }
}
