use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use user_smoke::UserStorage;
use user_smoke::config::Config;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        init_schema = cfg.init_schema
    );

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let acquire = UserStorage::connect(&cfg.database_url, cfg.init_schema);
    let report = user_smoke::script::run(acquire, &mut stdout, &mut stderr).await;

    info!(phase = ?report.final_phase(), ok = report.outcome.is_ok(), "run settled");
    Ok(())
}
