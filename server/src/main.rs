use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{logging, Config};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    logging::init(config.log_format);

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "server starting");
    todo_server::run(listener).await
}
