use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::ServerConfig;
use mergington_activities::database::ActivityDirectory;
use mergington_activities::web::{app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mergington_activities=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let directory = ActivityDirectory::seeded();
    info!(
        activities = directory.list().await.len(),
        "activity directory seeded"
    );

    let app = app_router(AppState::new(directory), &config.static_dir);

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("unable to bind {}: {}", addr, e))?;
            warn!("unable to bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("unable to bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!(
        "frontend at http://{}/static/index.html (serving {})",
        bound_addr,
        config.static_dir.display()
    );

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
