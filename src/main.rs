use product_api::{
    app::{create_app, AppState},
    config::load_config,
    infrastructure::{database::DatabaseManager, logger::Logger},
};
use std::{path::PathBuf, time::Duration};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 可选参数：配置文件路径
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    Logger::init(&config.logging.level);
    info!("Starting product server...");

    let db = DatabaseManager::connect(&config.database).await.map_err(|e| {
        error!("Failed to open database {}: {}", config.database.url, e);
        e
    })?;
    info!("Database ready: {}", config.database.url);

    let state = AppState::new(db.clone());
    let app = create_app(state, Duration::from_secs(config.http.timeout_seconds));

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product server running on http://{}", addr);
    info!("   GET    /product        - List products");
    info!("   POST   /product        - Create product");
    info!("   GET    /product/:id    - Get product by id");
    info!("   PUT    /product/:id    - Replace product");
    info!("   DELETE /product/:id    - Delete product");
    info!("   GET    /health         - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
