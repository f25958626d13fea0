use clap::Parser;
use tracing::warn;

mod cli;
mod logging;
mod settings;
mod startup;

pub use startup::StartupError;

/// Parse flags, load settings, scan the library, then serve until shutdown.
/// The scan completes before the listener is bound.
pub fn run() -> Result<(), StartupError> {
    let cli = cli::Cli::parse();

    let (mut settings, config_problem) = settings::load_settings();
    settings::apply_cli(&mut settings, &cli);

    logging::init(&settings.logging);
    if let Some(msg) = config_problem {
        warn!("{msg}");
    }

    let state = startup::build_state(&settings)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    rt.block_on(startup::serve(state, &settings.server))
}
