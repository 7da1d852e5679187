use crate::core::data::pixel_buffer::PixelBuffer;
use winit::window::Window;

/// Presentation side of the GUI: owns the window framebuffer and a
/// CPU-side staging frame the visualizer controller renders into.
pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Self;

    /// The staging frame for the next redraw.
    fn frame(&mut self) -> &mut PixelBuffer;

    fn resize(&mut self, width: u32, height: u32);

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &egui::Context,
    ) -> Result<(), pixels::Error>;
}
