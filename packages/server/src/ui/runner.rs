//! Server runner.

use std::{error::Error, future::Future, sync::Arc};

use tokio::net::TcpListener;

use crate::domain::SystemClock;

use super::{config::ServerConfig, router::build_router, signal::shutdown_signal, state::AppState};

/// Run the server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let listener = TcpListener::bind(config.bind_addr()?).await?;
    serve(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// The sweeper runs for exactly as long as the HTTP server does.
pub async fn serve<F>(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let settings = config.room_settings()?;
    let state = Arc::new(AppState::in_memory(Arc::new(SystemClock::new()), &settings));

    let sweeper = state.sweeper.clone().start();
    let app = build_router(state);

    tracing::info!(
        addr = %listener.local_addr()?,
        broadcast_target = %settings.broadcast_target,
        ttl_secs = settings.participant_ttl.as_secs(),
        sweep_interval_secs = settings.sweep_interval.as_secs(),
        "Chat room server listening"
    );

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    sweeper.stop().await;
    tracing::info!("Server stopped");

    result.map_err(Into::into)
}
