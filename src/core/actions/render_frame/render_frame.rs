use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::data::colour::Colour;
use crate::core::data::highlight_map::HighlightMap;
use crate::core::data::render_state::RenderState;

pub const BACKGROUND_COLOUR: Colour = Colour::WHITE;

/// Base bar colours, alternating by index parity.
pub const BAR_COLOURS: [Colour; 2] = [Colour::GREY, Colour::SILVER];

/// Paints the sequence as a bar chart onto the surface.
///
/// Bar `i` spans `x = i * bar_width` with its top at
/// `height - (value / max_value) * bar_height`. Colour is the highlight
/// override when the index is present in the map, otherwise the base
/// colour keyed by `i % 2`. The idle redraw (empty map) and the step
/// redraw (two-entry map) share this geometry; only colour selection
/// differs.
///
/// Normalization divides by the sequence's fixed bound, not the data's own
/// maximum; out-of-bound values overflow the surface and are clipped by
/// the `fill_rect` implementation.
pub fn render_frame<S: Surface>(
    state: &RenderState,
    highlight_map: &HighlightMap,
    clear_first: bool,
    surface: &mut S,
) {
    let size = state.size();

    if clear_first {
        surface.fill_rect(
            0.0,
            0.0,
            f64::from(size.width),
            f64::from(size.height),
            BACKGROUND_COLOUR,
        );
    }

    let geometry = state.geometry();
    let sequence = state.sequence();
    let max_value = f64::from(sequence.max_value());

    for (i, &value) in sequence.values().iter().enumerate() {
        let v = if max_value > 0.0 {
            f64::from(value) / max_value
        } else {
            0.0
        };

        let x = (i as f64) * f64::from(geometry.bar_width());
        let y = f64::from(size.height) - v * f64::from(geometry.bar_height());

        let colour = highlight_map
            .colour_for(i)
            .unwrap_or(BAR_COLOURS[i % 2]);

        surface.fill_rect(
            x,
            y,
            f64::from(geometry.bar_width()),
            f64::from(geometry.bar_height()),
            colour,
        );
    }
}
