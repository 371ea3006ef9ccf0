use monitor_comparator;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the monitor comparator application
    monitor_comparator::run_app()
}
