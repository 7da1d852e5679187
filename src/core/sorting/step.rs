use crate::core::data::colour::Colour;
use crate::core::data::highlight_map::HighlightMap;
use std::error::Error;
use std::fmt;

/// Highlight colour for the index a value just moved into.
pub const MOVED_TO_COLOUR: Colour = Colour::GREEN;

/// Highlight colour for the index a value just moved away from.
pub const MOVED_FROM_COLOUR: Colour = Colour::RED;

/// Result of one `resume` call on a sorting process.
///
/// `Suspended` means exactly one swap was performed; the highlight map
/// colours the two indices it touched and is meant to be rendered
/// immediately. `Completed` means the work is exhausted and the sequence
/// is fully ordered in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Suspended { highlight: HighlightMap },
    Completed,
}

/// Resuming a completed process is a caller bug; the process fails fast
/// instead of silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeError {
    AlreadyCompleted,
}

impl fmt::Display for ResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCompleted => {
                write!(f, "resume called on a completed sorting process")
            }
        }
    }
}

impl Error for ResumeError {}
