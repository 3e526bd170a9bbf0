use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use mindscale_api::{
    config::ApiConfig, configure, helpers::llm::create_llm_client, AssessmentContext,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "mindscale-api")]
#[command(about = "Scores student survey responses for depression risk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Configuration file path (defaults to the platform config dir)
    #[arg(short, long, value_name = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_path) = match args.config {
        Some(path) => (ApiConfig::load_from(&path)?, path),
        None => ApiConfig::load()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!(config = %config_path.display(), "Loaded configuration");

    let llm = create_llm_client(&config.llm)?;
    info!(
        provider = llm.provider_name(),
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        "Text-generation backend configured"
    );

    let context = web::Data::new(AssessmentContext::new(llm, config.scoring_options()));
    let allowed_origins = config
        .cors
        .as_ref()
        .map(|cors| cors.allowed_origins.clone())
        .unwrap_or_default();

    let bind_addr = config.server.bind_addr();
    info!("Starting mindscale-api server at http://{}", bind_addr);

    let mut server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(context.clone())
            .configure(configure)
    })
    .bind(&bind_addr)?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
