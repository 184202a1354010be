use holocron::{config::Config, diagram::SchemaGraph, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    match &config.database_url {
        Some(database_url) => {
            if let Err(e) = startup::connect_to_database(database_url).await {
                eprintln!("Database error: {e}");
                std::process::exit(1);
            }
            tracing::info!("Catalog migrations applied");
        }
        None => tracing::info!("DATABASE_URL not set, skipping migrations"),
    }

    let graph = SchemaGraph::catalog();
    if let Err(e) = graph.render_png(&config.diagram_path) {
        eprintln!("Diagram error: {e}");
        std::process::exit(1);
    }

    tracing::info!(path = %config.diagram_path.display(), "Wrote entity relationship diagram");
}
