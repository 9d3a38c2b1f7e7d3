mod commands;
mod logging;
mod settings;

use settings::{Command, Settings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let settings = Settings::from_cli();
    info!("Point Quadtree v{}", env!("CARGO_PKG_VERSION"));

    let config = settings.config();
    info!(
        capacity = config.max_points_per_node,
        max_depth = config.max_depth,
        "quadtree configuration"
    );

    match settings.command.unwrap_or_default() {
        Command::Demo(args) => {
            let mut stdout = std::io::stdout().lock();
            commands::demo::run(config, &args, &mut stdout)
        }
        Command::Export(args) => commands::export::run(config, &args),
        Command::Bench(args) => commands::bench::run(config, &args),
    }
}
