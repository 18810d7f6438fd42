use listy_api::routes::{cors_layer, create_router};
use listy_api::server::{Server, ServerConfig};
use listy_api::state::AppState;
use listy_infrastructure::config::load_dotenv;
use listy_infrastructure::{OpenAiConfig, StoreFactory};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = load_dotenv();
    init_tracing();
    for path in &loaded {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    tracing::info!("Starting Listy API server");

    let factory = StoreFactory::from_env()?;
    let store = factory.create()?;
    let breakdown = StoreFactory::create_breakdown(OpenAiConfig::from_env())?;

    let cors_origin = std::env::var("CORS_ORIGIN")
        .ok()
        .filter(|origin| !origin.trim().is_empty());
    let router = create_router(
        AppState::new(store, breakdown),
        cors_layer(cors_origin.as_deref()),
    );

    Server::new(ServerConfig::from_env()).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listy_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
