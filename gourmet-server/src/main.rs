use gourmet_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    gourmet_server::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("GourmetGo server starting...");

    // 2. State (seeded in-memory store + services)
    let state = ServerState::with_config(&config);

    // 3. HTTP server (spawns the order simulator, stops it on shutdown)
    let server = Server::new(config, state);
    server.run().await?;

    Ok(())
}
