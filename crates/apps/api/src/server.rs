use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use http::{HeaderValue, header};
use std::iter::once;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Binds the configured host and port and serves until Ctrl-C or SIGTERM.
pub async fn serve(settings: AppSettings) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    serve_with_listener(listener, settings).await
}

/// Serves the album front-end on an already bound listener.
pub async fn serve_with_listener(listener: TcpListener, settings: AppSettings) -> Result<()> {
    serve_context(listener, ApiContext::new(settings)).await
}

/// Serves a prepared [`ApiContext`] on an already bound listener.
pub async fn serve_context(listener: TcpListener, api_state: ApiContext) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let settings = &api_state.settings;
    if settings.secrets.dropbox_access_token.is_empty() {
        warn!("No dropbox access token configured, thumbnail requests will be rejected upstream.");
    }
    let static_images = settings.api.static_dir.join("images");
    let allowed_origins = settings.api.allowed_origins.clone();

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([http::Method::GET])
        .allow_origin(allowed_origins)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    // --- Create Router ---
    let app = create_router(api_state)
        .nest_service("/images", ServeDir::new(static_images))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )));

    let addr = listener.local_addr()?;
    info!("🐸 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
