use std::process::ExitCode;

use tracing::{error, info};

use filedrop::{Config, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = filedrop::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        filedrop::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Filedrop - file upload service");

    let storage = match filedrop::prepare_storage(&config.storage) {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to prepare storage: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("File storage initialized at: {}", storage.root().display());

    let server = match WebServer::new(&config.server, &config.storage, storage) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
