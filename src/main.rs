use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use feelsync::comfort::ComfortGenerator;
use feelsync::config::Settings;
use feelsync::llm::{AuthenticationManager, GeminiClient};
use feelsync::routes::{configure_routes, AppContext};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::parse();
    let generation_config = settings.generation_config()?;

    info!(
        project_id = %settings.project_id,
        location = %settings.location,
        model = %settings.model,
        credentials = ?settings.credentials_file,
        "initialising Vertex AI client"
    );

    let auth_manager =
        AuthenticationManager::from_optional_file(settings.credentials_file.as_deref()).await?;
    let client = GeminiClient::with_auth(
        settings.project_id.clone(),
        settings.location.clone(),
        settings.model.clone(),
        auth_manager,
        settings.request_timeout(),
    )?;

    let ctx = AppContext {
        generator: ComfortGenerator::new(Arc::new(client), generation_config),
        max_mood_chars: settings.max_mood_chars,
    };
    let routes = configure_routes(ctx);

    let addr = settings.bind_addr();
    info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
