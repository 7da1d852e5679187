fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = sort_visualizer::PpmFilePresenter::new();
    let mut controller = sort_visualizer::CliDemoController::new(presenter);

    std::fs::create_dir_all("output")?;
    controller.run(
        sort_visualizer::SortKinds::Bubble,
        sort_visualizer::SortDirection::Ascending,
    )?;
    controller.write("output/sorted.ppm")?;

    Ok(())
}
