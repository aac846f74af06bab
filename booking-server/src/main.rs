use booking_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Restaurant booking server starting...");

    let config = Config::from_env();
    let state = ServerState::initialize(&config);

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
