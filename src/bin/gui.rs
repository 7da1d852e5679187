fn main() {
    let presenter_factory = sort_visualizer::PixelsPresenterFactory::new();
    let command = sort_visualizer::RunGuiCommand::new(presenter_factory);

    command.execute();
}
