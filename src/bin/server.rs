//! chorus-server — serve the fusion engine over HTTP on port 8080.

use std::sync::Arc;

use chorus::server::create_router;
use chorus::{FusionConfig, FusionEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chorus=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let engine = Arc::new(FusionEngine::new(FusionConfig::default())?);
    let app = create_router(engine);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!(addr = %listener.local_addr()?, "chorus-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
