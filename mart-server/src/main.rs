use mart_server::{
    Config, Server, ServerState, cleanup_old_logs, init_logger, init_logger_with_file,
    print_banner,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv is optional; real env vars win)
    dotenv::dotenv().ok();

    // 2. Configuration
    let config = Config::from_env()?;

    // 3. Logging (file logging + JSON in production)
    if config.is_production() {
        let log_dir = config.log_dir();
        init_logger_with_file(&config.log_level, true, log_dir.to_str())?;
        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::warn!("Failed to clean up old logs: {}", e);
        }
    } else {
        init_logger(&config.log_level)?;
    }

    print_banner();
    tracing::info!(
        run_address = %config.run_address,
        accrual_address = %config.accrual_address,
        environment = %config.environment,
        "Bonus Mart server starting"
    );

    // 4. Server state (work dir, database, services)
    let state = ServerState::initialize(&config).await?;

    // 5. Serve
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
