use std::marker::PhantomData;

use crate::controllers::visualizer::VisualizerController;
use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::command::gui_command::command_for_key;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Sorting Visualizer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self.presenter_factory.build(window);
        let size = window.inner_size();
        let controller = VisualizerController::new(SurfaceSize::new(size.width, size.height))
            .expect("default sequence bounds are valid");

        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut redraw_pending = true;

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        // Forward event to egui first
                        let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                        if egui_repaint {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::KeyboardInput {
                                event: key_event, ..
                            } => {
                                if !egui_consumed
                                    && key_event.state == ElementState::Pressed
                                    && !key_event.repeat
                                {
                                    if let PhysicalKey::Code(code) = key_event.physical_key {
                                        if let Some(command) = command_for_key(code) {
                                            if app.apply_command(command) {
                                                redraw_pending = true;
                                            }
                                        }
                                    }
                                }
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                // Run egui frame
                                let egui_output = app.update_ui(window);

                                // Handle egui platform output (e.g., clipboard, cursor changes)
                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                // Check if egui wants a repaint
                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.advance_and_render(egui_output) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }

                                // An active process gets one resume per frame:
                                // keep frames coming until it completes.
                                if app.is_sorting() {
                                    redraw_pending = true;
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(app.scale_factor as f32);
                                // Get the new physical size after scale factor change
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        // Only request redraw if state changed
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
