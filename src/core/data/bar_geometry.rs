use crate::core::data::surface_size::SurfaceSize;

/// Derived per-bar pixel geometry: how wide each bar is and the height the
/// largest possible value maps to. A pure function of the surface size and
/// the bar count; swapping values in place never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    bar_width: u32,
    bar_height: u32,
}

const HEIGHT_FRACTION: f64 = 0.9;

impl BarGeometry {
    #[must_use]
    pub fn calculate(size: SurfaceSize, bar_count: usize) -> Self {
        let bar_width = if bar_count == 0 {
            0
        } else {
            size.width / (bar_count as u32)
        };

        let bar_height = (f64::from(size.height) * HEIGHT_FRACTION).floor() as u32;

        Self {
            bar_width,
            bar_height,
        }
    }

    #[must_use]
    pub fn bar_width(self) -> u32 {
        self.bar_width
    }

    #[must_use]
    pub fn bar_height(self) -> u32 {
        self.bar_height
    }
}
