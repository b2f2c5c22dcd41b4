//! Collection webserver entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use webserver::{build_router, AppState};

#[derive(Parser)]
#[command(name = "webserver")]
#[command(about = "Stores the restaurant collection behind the two contracted endpoints")]
struct Args {
    /// Listen port
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// JSON file backing the collection
    #[arg(long, default_value = "data.json")]
    data_file: PathBuf,

    /// Log level for workspace crates
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    shared::logging::init_tracing(&args.log_level);

    let state = AppState::new(args.data_file.clone());
    let router = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "collection webserver listening on http://{addr} (data file: {})",
        args.data_file.display()
    );

    axum::serve(listener, router).await?;
    Ok(())
}
