use anyhow::Result;
use linkbio_http::{AppState, create_router};
use linkbio_service::{ImageProxy, PresenceClient, ViewCounterService};
use std::sync::Arc;
use tokio::signal;

use crate::Settings;

pub(crate) async fn run(settings: Settings, port: u16, host: String) -> Result<()> {
    let views = Arc::new(ViewCounterService::from_config(&settings.views)?);
    let image_proxy = ImageProxy::new()?;
    let presence = PresenceClient::new(&settings.presence_url)?;

    let state = Arc::new(AppState { views, image_proxy, presence, profile: settings.profile });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            },
            Err(e) => {
                tracing::warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
