use catalog_slugs::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use catalog_slugs::config::AppConfig;
use catalog_slugs::domain::slug::SlugRecordRepository;
use catalog_slugs::infrastructure::{
    database, repositories::SqliteSlugRecordRepository, time::SystemClock,
    util::DefaultSlugGenerator,
};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Assign slugs to every stored catalog record that does not have one yet.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let slug_repo: Arc<dyn SlugRecordRepository> =
        Arc::new(SqliteSlugRecordRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(slug_repo, clock, slugger, config.slug_settings());

    tracing::info!(
        database = config.database_url(),
        strategy = ?config.slug_settings().strategy,
        "starting slug backfill"
    );
    let report = services
        .slug_commands
        .backfill(config.backfill_batch_size())
        .await?;

    println!("{}", serde_json::to_string(&report)?);
    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
