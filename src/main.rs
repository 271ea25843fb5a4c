mod ui;
mod engine;
mod model;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ui::settings_io::load_settings();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Data Governance Serious Game",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::app::QuizApp::new(settings)))
        }),
    )
}
