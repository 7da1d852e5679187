use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<P: GuiPresenterPort> {
    fn build(&self, window: &'static Window) -> P;
}
