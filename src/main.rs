//! Rackline Server - Datacenter & Network Equipment Inventory
//!
//! A Rust REST API server for equipment inventory management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rackline_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rackline_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rackline Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/profile", get(api::auth::profile))
        .route("/auth/profile", put(api::auth::update_profile))
        .route("/auth/me", get(api::auth::profile))
        // Datacenters
        .route("/datacenters", get(api::datacenters::list_datacenters))
        .route("/datacenters", post(api::datacenters::create_datacenter))
        .route("/datacenters/:id", get(api::datacenters::get_datacenter))
        .route("/datacenters/:id", put(api::datacenters::update_datacenter))
        .route("/datacenters/:id", delete(api::datacenters::delete_datacenter))
        // Categories
        .route("/categories", post(api::categories::create_category))
        .route(
            "/categories/datacenter/:datacenter_id",
            get(api::categories::list_categories_by_datacenter),
        )
        .route("/categories/:id", get(api::categories::get_category))
        .route("/categories/:id", put(api::categories::update_category))
        .route("/categories/:id", delete(api::categories::delete_category))
        // Equipment types
        .route("/equipment-types", post(api::equipment_types::create_equipment_type))
        .route(
            "/equipment-types/category/:category_id",
            get(api::equipment_types::list_equipment_types_by_category),
        )
        .route("/equipment-types/:id", get(api::equipment_types::get_equipment_type))
        .route("/equipment-types/:id", put(api::equipment_types::update_equipment_type))
        .route("/equipment-types/:id", delete(api::equipment_types::delete_equipment_type))
        // Equipment
        .route("/equipments", post(api::equipment::create_equipment))
        .route(
            "/equipments/datacenter/:datacenter_id",
            get(api::equipment::list_equipment_by_datacenter),
        )
        .route(
            "/equipments/datacenter/:datacenter_id/type/:type_id",
            get(api::equipment::list_equipment_by_datacenter_and_type),
        )
        .route("/equipments/type/:type_id", get(api::equipment::list_equipment_by_type))
        .route("/equipments/:id", get(api::equipment::get_equipment))
        .route("/equipments/:id", put(api::equipment::update_equipment))
        .route("/equipments/:id", delete(api::equipment::delete_equipment))
        // Network equipment types
        .route(
            "/network-equipment-types",
            get(api::network::list_network_equipment_types)
                .post(api::network::create_network_equipment_type),
        )
        .route(
            "/network-equipment-types/:id",
            get(api::network::get_network_equipment_type)
                .put(api::network::update_network_equipment_type)
                .delete(api::network::delete_network_equipment_type),
        )
        // Network equipment
        .route(
            "/network-equipments",
            get(api::network::list_network_equipment).post(api::network::create_network_equipment),
        )
        .route(
            "/network-equipments/type/:type_id",
            get(api::network::list_network_equipment_by_type),
        )
        .route(
            "/network-equipments/:id",
            get(api::network::get_network_equipment)
                .put(api::network::update_network_equipment)
                .delete(api::network::delete_network_equipment),
        )
        // Users (admin)
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
