use control_panel::app_config::AppConfig;
use control_panel::console;
use control_panel::device_loader::load_devices_from;
use control_panel::domain::command_sink::CommandSink;
use control_panel::server::{self, HttpCommandSink};
use control_panel::templates::{DirectoryTemplates, TemplateRegistry};
use control_panel::view_model::AppViewModel;
use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = server::new_client(&config)?;
    let sink: Arc<dyn CommandSink> = Arc::new(HttpCommandSink::new(client, config.server().url()));
    info!(url = config.server().url(), "✅  Initialized server client");

    let templates: Arc<dyn TemplateRegistry> = Arc::new(DirectoryTemplates::new(config.templates().directory(), config.templates().extension()));

    let records = load_devices_from(config.devices().file()).await?;
    let view_model = AppViewModel::new(records, templates, sink);
    info!("✅  Built view model for {} device(s)", view_model.devices().len());

    console::render(&view_model);
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    console::run(&view_model, BufReader::new(io::stdin())).await?;

    Ok(())
}
