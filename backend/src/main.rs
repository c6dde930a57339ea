use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use printmaster_server::config::ServerConfig;
use printmaster_server::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,printmaster_server=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::debug!("Loaded config: {:?}", config);

    // Kept alive for the whole process so buffered events get flushed on exit
    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        tracing::info!("Error reporting enabled");
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}, build the frontend with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let app = build_router(&config).context("Failed to build router")?;

    tracing::info!(
        "Serving {} on port {}",
        config.dist_dir.display(),
        config.port
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
