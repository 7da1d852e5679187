use winit::keyboard::KeyCode;

/// Input events the GUI translates into controller calls. Each is only
/// effective while no process is active, except `Reset`, which always
/// applies and cancels a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerCommand {
    Reset,
    StartSorting,
    SetAscending,
    SetDescending,
    SelectBubbleSort,
    SelectInsertionSort,
}

#[must_use]
pub fn command_for_key(key: KeyCode) -> Option<VisualizerCommand> {
    match key {
        KeyCode::KeyR => Some(VisualizerCommand::Reset),
        KeyCode::Space => Some(VisualizerCommand::StartSorting),
        KeyCode::KeyA => Some(VisualizerCommand::SetAscending),
        KeyCode::KeyD => Some(VisualizerCommand::SetDescending),
        KeyCode::KeyB => Some(VisualizerCommand::SelectBubbleSort),
        KeyCode::KeyI => Some(VisualizerCommand::SelectInsertionSort),
        _ => None,
    }
}
