mod api;
mod router;
mod startup;
mod state;
mod store;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    ecodrop_core::config::load_dotenv();
    let config = ecodrop_core::Config::from_env();
    config.log_summary();

    let state = startup::build_app_state();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
