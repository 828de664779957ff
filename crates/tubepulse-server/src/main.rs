mod api;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use tubepulse_sentiment::{LexiconClassifier, TextClassifier};
use tubepulse_youtube::YoutubeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tubepulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let youtube = Arc::new(YoutubeClient::new(
        &config.youtube_api_key,
        config.youtube_request_timeout_secs,
    )?);
    // Built once at startup and shared read-only by every request handler.
    let classifier: Arc<dyn TextClassifier + Send + Sync> = Arc::new(LexiconClassifier::new());

    let app = build_app(AppState {
        youtube,
        classifier,
        max_comment_pages: config.max_comment_pages,
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting tubepulse server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
