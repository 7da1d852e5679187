use crate::core::sorting::bubble::BubbleSortProcess;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::insertion::InsertionSortProcess;
use crate::core::sorting::kinds::SortKinds;
use crate::core::sorting::ports::sorting_process::SortingProcess;

/// Pure lookup from a selected mode to a fresh sorting process.
#[must_use]
pub fn sorting_process_factory(
    kind: SortKinds,
    direction: SortDirection,
) -> Box<dyn SortingProcess> {
    match kind {
        SortKinds::Bubble => Box::new(BubbleSortProcess::new(direction)),
        SortKinds::Insertion => Box::new(InsertionSortProcess::new(direction)),
    }
}
