use photo_filter::app::PhotoFilter;
use photo_filter::config::Settings;

fn setup_logging(settings: &Settings) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_target(true)
        .with_line_number(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("⚠️  Logging unavailable: {}", e);
    }
}

fn main() -> iced::Result {
    let settings = Settings::default();
    setup_logging(&settings);

    let window_size = settings.window_size;

    iced::application(PhotoFilter::title, PhotoFilter::update, PhotoFilter::view)
        .theme(PhotoFilter::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || PhotoFilter::new(settings))
}
