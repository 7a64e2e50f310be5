use std::process::ExitCode;

use tracing::{error, info};

use userboard::{board, Config, Database, HttpUserDirectory, WebServer};

const SERVICE_NAME: &str = "board-service";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = userboard::logging::init(&config.logging, SERVICE_NAME) {
        eprintln!("Failed to initialize logging: {e}");
        userboard::logging::init_console_only(&config.logging.level);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{SERVICE_NAME} failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> userboard::Result<()> {
    config.validate()?;

    let settings = &config.board_service;
    let db = Database::open(&settings.database_path, board::MIGRATIONS).await?;

    let directory = HttpUserDirectory::new(&config.directory)?;
    info!(
        "Resolving authors via {} (request timeout {} ms)",
        directory.base_url(),
        config.directory.request_timeout_ms
    );

    WebServer::board_service(settings, db, directory)?.run().await?;
    Ok(())
}
