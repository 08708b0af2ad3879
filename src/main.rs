use mindful_portal::{
    AppState, Navigator,
    config::{AppConfig, Env},
    create_router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, sets up logging, builds the navigator and serves the
/// navigation API.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mindful_portal=debug,tower_http=info".into());

    // Pretty output locally, JSON for log aggregation in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // A broken route table is a build defect; refuse to start.
    let navigator = Navigator::portal().expect("FATAL: portal route configuration is invalid");
    let groups = navigator.pages().groups().len();
    tracing::info!(groups, "route configuration validated");

    let bind_addr = config.bind_addr.clone();
    let app = create_router(AppState {
        navigator: Arc::new(navigator),
        config,
    });

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: failed to bind listener. Check BIND_ADDR.");

    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated");
}
