use anyhow::Result;
use log::info;
use std::sync::Arc;

use quill::config::Config;
use quill::data::Database;
use quill::services::BlogService;
use quill::utils;
use quill::web::{self, AppState, Renderer};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging
    env_logger::init();
    info!("Starting quill blog server...");

    // Configuration is read once and passed down from here
    let config = Config::from_env()?;

    // Ensure the data directory exists before opening the database file
    utils::ensure_directory_exists(&config.database_path)?;

    info!("Opening database at {}...", config.database_path.display());
    let database = Database::new(&config.database_path)?;

    let service = BlogService::new(
        database.post_repository(),
        database.category_repository(),
        database.tag_repository(),
    );

    info!("Loading templates from {}...", config.templates_glob);
    let renderer = Renderer::new(&config.templates_glob)?;

    let state = Arc::new(AppState::new(service, renderer)?);
    let app = web::router(state, config.static_dir.clone());

    info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
