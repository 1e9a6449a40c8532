use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::{load_config, select_provider};
use crate::config::ServerConfig;
use crate::errors::ScandeckError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ScandeckError> {
    let mut config = load_config(args.config.as_deref()).await?;

    // Explicit flags beat the config file, which beats defaults.
    if args.host.is_some() || args.port.is_some() {
        let server = config.server.get_or_insert_with(ServerConfig::default);
        if let Some(host) = args.host {
            server.host = Some(host);
        }
        if let Some(port) = args.port {
            server.port = Some(port);
        }
    }

    let provider = select_provider(&config);
    info!(provider = provider.provider_name(), "Starting API server");

    let state = api::create_app_state(provider).await?;
    let app = api::build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ScandeckError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
