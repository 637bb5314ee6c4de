mod app;
mod editor;
mod error;
mod model;

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    // RUST_LOG overrides; default to debug for our own crate.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,linemark=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn main() -> eframe::Result<()> {
    setup_logging();
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Line Annotator",
        native_options,
        Box::new(|cc| Ok(Box::new(app::AnnotatorApp::new(cc)))),
    )
}
