use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use qna_api::api::AppState;
use qna_api::config::AppConfig;
use qna_api::database::Database;
use qna_api::error::AppResult;
use qna_api::routes::configure_routes;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "qna-api", version, about = "Questions and answers HTTP service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load configuration first to get logging settings
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("Starting qna-api on {}:{}", config.server.host, config.server.port);

    let database = Database::connect(&config.database).await?;
    database.init().await?;

    let app_state = web::Data::new(AppState {
        database: database.clone(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    info!("HTTP server stopped");
    database.close().await;

    Ok(())
}
