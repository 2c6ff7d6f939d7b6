use caretrack::api::{start_server, ApiContext};
use caretrack::{config, db, init_tracing};

#[tokio::main]
async fn main() {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let settings = config::Settings::from_env()?;

    if let Some(parent) = settings.database_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create data directory {parent:?}: {e}"))?;
    }

    let conn = db::open_database(&settings.database_path)
        .map_err(|e| format!("Cannot open database {:?}: {e}", settings.database_path))?;
    tracing::info!(path = ?settings.database_path, "database ready");

    let ctx = ApiContext::new(conn);
    let mut server = start_server(ctx, settings.bind_addr).await?;
    tracing::info!(addr = %server.addr, "listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Cannot listen for shutdown signal: {e}"))?;

    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}
