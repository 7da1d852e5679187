use crate::controllers::visualizer::{FrameReport, VisualizerController};
use crate::core::data::surface_size::SurfaceSize;
use crate::core::sorting::direction::SortDirection;
use crate::core::sorting::kinds::SortKinds;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::command::gui_command::VisualizerCommand;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: VisualizerController,
    last_frame_report: Option<FrameReport>,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: VisualizerController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            last_frame_report: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Translates an input event into the matching controller call.
    /// Returns whether the controller accepted it.
    pub fn apply_command(&mut self, command: VisualizerCommand) -> bool {
        match command {
            VisualizerCommand::Reset => match self.controller.reset() {
                Ok(()) => true,
                Err(e) => {
                    self.last_error_message = Some(e.to_string());
                    false
                }
            },
            VisualizerCommand::StartSorting => self.controller.start_sorting(),
            VisualizerCommand::SetAscending => {
                self.controller.set_direction(SortDirection::Ascending)
            }
            VisualizerCommand::SetDescending => {
                self.controller.set_direction(SortDirection::Descending)
            }
            VisualizerCommand::SelectBubbleSort => self.controller.set_sort_kind(SortKinds::Bubble),
            VisualizerCommand::SelectInsertionSort => {
                self.controller.set_sort_kind(SortKinds::Insertion)
            }
        }
    }

    /// One frame: advance the visualizer into the staging frame, then
    /// present it with the egui overlay on top.
    pub fn advance_and_render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        match self.controller.advance_frame(self.presenter.frame()) {
            Ok(report) => self.last_frame_report = Some(report),
            Err(e) => self.last_error_message = Some(e.to_string()),
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.controller.is_sorting()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.controller.resize(SurfaceSize::new(width, height));
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        let sorting = self.controller.is_sorting();
        let mut selected_kind = self.controller.sort_kind();
        let mut selected_direction = self.controller.direction();
        let mut sort_clicked = false;
        let mut reset_clicked = false;
        let (width, height) = (self.width, self.height);
        let last_frame_report = self.last_frame_report;
        let last_error_message = self.last_error_message.clone();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.heading("Sorting Visualizer");
                    ui.separator();

                    ui.add_enabled_ui(!sorting, |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Algorithm:");
                            egui::ComboBox::from_id_source("sort_kind")
                                .selected_text(selected_kind.display_name())
                                .show_ui(ui, |ui| {
                                    for &kind in SortKinds::ALL {
                                        ui.selectable_value(
                                            &mut selected_kind,
                                            kind,
                                            kind.display_name(),
                                        );
                                    }
                                });
                        });

                        ui.horizontal(|ui| {
                            ui.label("Direction:");
                            egui::ComboBox::from_id_source("sort_direction")
                                .selected_text(selected_direction.display_name())
                                .show_ui(ui, |ui| {
                                    for &direction in SortDirection::ALL {
                                        ui.selectable_value(
                                            &mut selected_direction,
                                            direction,
                                            direction.display_name(),
                                        );
                                    }
                                });
                        });

                        if ui.button("Sort (space)").clicked() {
                            sort_clicked = true;
                        }
                    });

                    if ui.button("Reset (r)").clicked() {
                        reset_clicked = true;
                    }

                    ui.separator();
                    ui.label(if sorting { "Sorting..." } else { "Idle" });
                    if last_frame_report == Some(FrameReport::Completed) {
                        ui.label("Last run completed");
                    }
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label("Keys: space sort, r reset, a/d direction, b/i algorithm");

                    if let Some(message) = &last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        if selected_kind != self.controller.sort_kind() {
            self.controller.set_sort_kind(selected_kind);
        }
        if selected_direction != self.controller.direction() {
            self.controller.set_direction(selected_direction);
        }
        if sort_clicked {
            self.apply_command(VisualizerCommand::StartSorting);
        }
        if reset_clicked {
            self.apply_command(VisualizerCommand::Reset);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
