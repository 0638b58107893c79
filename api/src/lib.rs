mod config;
mod error;
mod flash;
mod handlers;

use anyhow::Context;
use axum::{Router, routing::get};
use migration::{Migrator, MigratorTrait};
use restaurant_service::sea_orm::{Database, DatabaseConnection};
use tera::Tera;
use tower_cookies::CookieManagerLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::Config;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug,sea_orm=debug";

#[derive(Clone)]
pub struct AppState {
    pub templates: Tera,
    pub conn: DatabaseConnection,
}

pub fn templates() -> Result<Tera, tera::Error> {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/restaurants/", get(handlers::list_restaurants))
        .route(
            "/restaurants/new/",
            get(handlers::new_restaurant).post(handlers::create_restaurant),
        )
        .route(
            "/restaurants/{id}/edit/",
            get(handlers::edit_restaurant).post(handlers::update_restaurant),
        )
        .route(
            "/restaurants/{id}/delete/",
            get(handlers::confirm_delete_restaurant).post(handlers::delete_restaurant),
        )
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let conn = Database::connect(config.database_url.as_str())
        .await
        .context("Database connection failed")?;
    Migrator::up(&conn, None)
        .await
        .context("Database migration failed")?;

    let templates = templates().context("Tera initialization failed")?;

    let state = AppState { templates, conn };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.server_url())
        .await
        .with_context(|| format!("Cannot bind {}", config.server_url()))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
