use crate::core::data::bar_geometry::BarGeometry;
use crate::core::data::sequence::Sequence;
use crate::core::data::surface_size::SurfaceSize;

/// Owns the sequence being visualized together with the surface dimensions
/// and the geometry derived from them.
///
/// Geometry is recomputed when the dimensions change or the sequence is
/// replaced. In-place mutation through `sequence_mut` never touches it:
/// swaps do not change the length, and bar geometry depends only on the
/// surface size and the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    size: SurfaceSize,
    sequence: Sequence,
    geometry: BarGeometry,
}

impl RenderState {
    #[must_use]
    pub fn new(size: SurfaceSize, sequence: Sequence) -> Self {
        let geometry = BarGeometry::calculate(size, sequence.len());

        Self {
            size,
            sequence,
            geometry,
        }
    }

    pub fn set_sequence(&mut self, sequence: Sequence) {
        self.geometry = BarGeometry::calculate(self.size, sequence.len());
        self.sequence = sequence;
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.geometry = BarGeometry::calculate(size, self.sequence.len());
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Exclusive mutation window for the active sorting process; handed
    /// out for the duration of a single `resume` call.
    pub fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    #[must_use]
    pub fn geometry(&self) -> BarGeometry {
        self.geometry
    }
}
