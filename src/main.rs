use movie_mcp_gateway::config::ServerConfig;
use movie_mcp_gateway::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_mcp_gateway=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(config).await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
